//! Observation assembly
//!
//! Polls camera and LiDAR sources, merges the readings into one
//! `Observation`, and feeds the steering history. No caching: every call
//! re-polls the sensors.

use std::time::Instant;

use contracts::{EnvBlueprint, ImageRequest, Observation, Result, SteeringCommand};
use metrics::histogram;
use perception::{decode_frames, LidarPipeline};
use sim_client::SimClient;
use tracing::trace;

use crate::history::SteerHistory;

/// Assembles one observation per call from a client handle
#[derive(Debug, Clone)]
pub struct ObservationAssembler {
    camera_labels: Vec<String>,
    requests: Vec<ImageRequest>,
    lidar: LidarPipeline,
    wants_images: bool,
}

impl ObservationAssembler {
    pub fn new(blueprint: &EnvBlueprint) -> Self {
        let requests = blueprint
            .camera_labels
            .iter()
            .map(ImageRequest::scene)
            .collect();
        Self {
            camera_labels: blueprint.camera_labels.clone(),
            requests,
            lidar: LidarPipeline::new(blueprint.lidar.clone()),
            wants_images: blueprint.wants_images(),
        }
    }

    /// Poll sensors and merge the readings.
    ///
    /// Order follows the reference pipeline: camera frames first, then the
    /// blocking LiDAR acquisition, then a zeroed steering placeholder which
    /// is offered to the history before the merged record is returned. Any
    /// sensor failure propagates unchanged; no partial observation is ever
    /// built.
    pub fn observe<C: SimClient>(
        &self,
        client: &mut C,
        history: &mut SteerHistory,
    ) -> Result<Observation> {
        let started = Instant::now();

        let images = if self.wants_images {
            let responses = client.get_images(&self.requests)?;
            decode_frames(&self.camera_labels, responses)?
        } else {
            Vec::new()
        };

        let lidar_points = self.lidar.acquire(|| client.get_lidar_data())?;

        // Steering telemetry is not wired to a live sensor; the placeholder
        // keeps the record shape stable until it is.
        let steer = SteeringCommand::zeroed();
        history.record_if_locked(&steer);

        histogram!("f110_env_observation_latency_ms")
            .record(started.elapsed().as_secs_f64() * 1000.0);
        trace!(
            lidar_points = lidar_points.len(),
            images = images.len(),
            "observation assembled"
        );

        Ok(Observation {
            lidar_points,
            steer,
            images,
        })
    }
}
