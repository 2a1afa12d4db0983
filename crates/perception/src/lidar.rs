//! LiDAR acquisition pipeline
//!
//! Polls the sensor source until a sample contains at least one complete 3D
//! point, then projects it onto the vehicle plane. The reference behavior is
//! an unbounded spin; here the loop is bounded by `max_attempts` and
//! surfaces `SensorTimeout` when exhausted, so a dead sensor cannot hang the
//! environment.

use std::cmp::Ordering;
use std::time::Duration;

use contracts::{EnvError, LidarData, LidarPollConfig, PlanarPoint, Result};
use metrics::counter;
use tracing::{debug, trace};

use crate::geometry::to_planar;

const SENSOR_NAME: &str = "lidar";

/// Bounded LiDAR poll-and-project pipeline
#[derive(Debug, Clone)]
pub struct LidarPipeline {
    config: LidarPollConfig,
}

impl LidarPipeline {
    pub fn new(config: LidarPollConfig) -> Self {
        Self { config }
    }

    /// Poll until a sample has at least 3 raw scalars, then project.
    ///
    /// `poll` is invoked up to `max_attempts` times, sleeping
    /// `poll_interval_sec` between attempts; a degenerate cloud never
    /// reaches the projection stage. Point order follows the sensor unless
    /// `sort_by_bearing` is enabled.
    pub fn acquire<F>(&self, mut poll: F) -> Result<Vec<PlanarPoint>>
    where
        F: FnMut() -> Result<LidarData>,
    {
        let interval = Duration::from_secs_f64(self.config.poll_interval_sec);

        for attempt in 1..=self.config.max_attempts {
            let sample = poll()?;
            if sample.has_points() {
                if attempt > 1 {
                    debug!(attempt, "lidar sample became valid after retries");
                }
                return Ok(self.project(&sample));
            }

            counter!("f110_env_lidar_poll_retries_total").increment(1);
            trace!(
                attempt,
                scalars = sample.len(),
                "lidar sample degenerate, re-polling"
            );

            if !interval.is_zero() && attempt < self.config.max_attempts {
                std::thread::sleep(interval);
            }
        }

        counter!("f110_env_lidar_poll_timeouts_total").increment(1);
        Err(EnvError::sensor_timeout(
            SENSOR_NAME,
            self.config.max_attempts,
        ))
    }

    fn project(&self, sample: &LidarData) -> Vec<PlanarPoint> {
        let mut points = to_planar(&sample.point_cloud);
        if self.config.sort_by_bearing {
            points.sort_by(|a, b| {
                a.bearing()
                    .partial_cmp(&b.bearing())
                    .unwrap_or(Ordering::Equal)
            });
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline(max_attempts: u32) -> LidarPipeline {
        LidarPipeline::new(LidarPollConfig {
            max_attempts,
            poll_interval_sec: 0.0,
            sort_by_bearing: false,
        })
    }

    #[test]
    fn test_valid_sample_succeeds_immediately() {
        let mut polls = 0;
        let points = pipeline(5)
            .acquire(|| {
                polls += 1;
                Ok(LidarData::new(vec![1.0, 2.0, 3.0]))
            })
            .unwrap();

        assert_eq!(polls, 1);
        assert_eq!(points, vec![PlanarPoint::new(2.0, 1.0)]);
    }

    #[test]
    fn test_degenerate_samples_are_repolled() {
        // fewer than 3 scalars must never reach the projection stage
        let mut polls = 0;
        let points = pipeline(5)
            .acquire(|| {
                polls += 1;
                if polls < 3 {
                    Ok(LidarData::new(vec![1.0, 2.0]))
                } else {
                    Ok(LidarData::new(vec![4.0, 5.0, 6.0]))
                }
            })
            .unwrap();

        assert_eq!(polls, 3);
        assert_eq!(points, vec![PlanarPoint::new(5.0, 4.0)]);
    }

    #[test]
    fn test_exhausted_bound_times_out() {
        let mut polls = 0;
        let err = pipeline(4)
            .acquire(|| {
                polls += 1;
                Ok(LidarData::default())
            })
            .unwrap_err();

        assert_eq!(polls, 4);
        assert!(
            matches!(err, EnvError::SensorTimeout { attempts: 4, .. }),
            "got: {err}"
        );
    }

    #[test]
    fn test_poll_error_propagates() {
        let err = pipeline(5)
            .acquire(|| Err(EnvError::observation_unavailable("lidar", "link down")))
            .unwrap_err();
        assert!(matches!(err, EnvError::ObservationUnavailable { .. }));
    }

    #[test]
    fn test_sensor_order_is_default() {
        // two points whose bearings are out of order; default keeps sensor order
        let cloud = vec![0.0, 1.0, 0.0, 1.0, 0.0, 0.0];
        let points = pipeline(1)
            .acquire(|| Ok(LidarData::new(cloud.clone())))
            .unwrap();
        assert_eq!(points[0], PlanarPoint::new(1.0, 0.0));
        assert_eq!(points[1], PlanarPoint::new(0.0, 1.0));
    }

    #[test]
    fn test_opt_in_bearing_sort() {
        let pipeline = LidarPipeline::new(LidarPollConfig {
            max_attempts: 1,
            poll_interval_sec: 0.0,
            sort_by_bearing: true,
        });
        // bearings: (1,0) -> 0 rad, (0,-1) -> -pi/2, (0,1) -> pi/2
        let cloud = vec![0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0];
        let points = pipeline.acquire(|| Ok(LidarData::new(cloud.clone()))).unwrap();
        let bearings: Vec<f32> = points.iter().map(|p| p.bearing()).collect();
        assert!(bearings.windows(2).all(|w| w[0] <= w[1]));
    }
}
