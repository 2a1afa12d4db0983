//! Mock simulator client
//!
//! Mock implementation for unit tests, supporting scripted sensor payloads
//! and injected failure scenarios.

use bytes::Bytes;
use contracts::{CarControls, EnvError, ImageRequest, ImageResponse, LidarData, Result};
use tracing::{debug, trace};

use crate::client::SimClient;

/// Mock client configuration
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Scalars returned by a warm LiDAR sample (flat x, y, z triples)
    pub lidar_sample: Vec<f32>,

    /// Number of initial LiDAR polls answered with an empty cloud, modeling
    /// a sensor that has not produced a sweep yet
    pub empty_lidar_polls: u32,

    /// Declared height of mock camera frames
    pub image_height: u32,

    /// Declared width of mock camera frames
    pub image_width: u32,

    /// Channels encoded into mock frame buffers
    pub image_channels: u32,

    /// Override the frame buffer length, for dimension-mismatch injection
    pub image_bytes_override: Option<usize>,

    /// Fail connection confirmation
    pub fail_connection: bool,

    /// Fail every LiDAR poll
    pub fail_lidar: bool,

    /// Fail every image fetch
    pub fail_images: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            // one sweep of four points straight ahead and to the sides
            lidar_sample: vec![
                1.0, 0.0, 0.1, //
                0.0, 1.0, 0.1, //
                -1.0, 0.0, 0.1, //
                0.0, -1.0, 0.1,
            ],
            empty_lidar_polls: 0,
            image_height: 64,
            image_width: 64,
            image_channels: 3,
            image_bytes_override: None,
            fail_connection: false,
            fail_lidar: false,
            fail_images: false,
        }
    }
}

/// Mock simulator client
///
/// Answers sensor reads from scripted payloads and journals every control
/// dispatch and reset so tests can assert on what the environment sent.
#[derive(Debug, Default)]
pub struct MockSimClient {
    config: MockConfig,
    connected: bool,
    api_control: bool,
    lidar_polls: u32,
    reset_count: u32,
    controls_log: Vec<CarControls>,
    image_requests_log: Vec<Vec<String>>,
}

impl MockSimClient {
    /// Create a mock with default scripted payloads
    pub fn new() -> Self {
        Self::with_config(MockConfig::default())
    }

    /// Create a mock with explicit configuration
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Mock whose LiDAR returns the given (x, y, z) points once warm
    pub fn with_lidar_points(points: &[[f32; 3]]) -> Self {
        Self::with_config(MockConfig {
            lidar_sample: points.iter().flatten().copied().collect(),
            ..MockConfig::default()
        })
    }

    /// Number of LiDAR polls answered so far
    pub fn lidar_polls(&self) -> u32 {
        self.lidar_polls
    }

    /// Number of simulator-level resets requested
    pub fn reset_count(&self) -> u32 {
        self.reset_count
    }

    /// Whether API control is currently armed
    pub fn api_control_enabled(&self) -> bool {
        self.api_control
    }

    /// Journal of every actuator command applied, in dispatch order
    pub fn controls_log(&self) -> &[CarControls] {
        &self.controls_log
    }

    /// Journal of viewpoint labels per image fetch
    pub fn image_requests_log(&self) -> &[Vec<String>] {
        &self.image_requests_log
    }

    fn ensure_connected(&self) -> Result<()> {
        if self.connected {
            Ok(())
        } else {
            Err(EnvError::connection("not connected"))
        }
    }

    fn frame_buffer(&self) -> Bytes {
        let len = self.config.image_bytes_override.unwrap_or(
            self.config.image_height as usize
                * self.config.image_width as usize
                * self.config.image_channels as usize,
        );
        Bytes::from(vec![128u8; len])
    }
}

impl SimClient for MockSimClient {
    fn confirm_connection(&mut self) -> Result<()> {
        if self.config.fail_connection {
            return Err(EnvError::connection("mock failure"));
        }
        self.connected = true;
        debug!("mock simulator connection confirmed");
        Ok(())
    }

    fn enable_api_control(&mut self, enabled: bool) -> Result<()> {
        self.ensure_connected()?;
        self.api_control = enabled;
        debug!(enabled, "mock api control");
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.ensure_connected()?;
        self.reset_count += 1;
        trace!(reset_count = self.reset_count, "mock simulator reset");
        Ok(())
    }

    fn set_car_controls(&mut self, controls: &CarControls) -> Result<()> {
        self.ensure_connected()?;
        self.controls_log.push(*controls);
        trace!(
            throttle = controls.throttle,
            steering = controls.steering,
            "mock controls applied"
        );
        Ok(())
    }

    fn get_lidar_data(&mut self) -> Result<LidarData> {
        self.ensure_connected()?;
        if self.config.fail_lidar {
            return Err(EnvError::observation_unavailable("lidar", "mock failure"));
        }
        self.lidar_polls += 1;
        if self.lidar_polls <= self.config.empty_lidar_polls {
            trace!(poll = self.lidar_polls, "mock lidar still warming up");
            return Ok(LidarData::default());
        }
        Ok(LidarData::new(self.config.lidar_sample.clone()))
    }

    fn get_images(&mut self, requests: &[ImageRequest]) -> Result<Vec<ImageResponse>> {
        self.ensure_connected()?;
        if self.config.fail_images {
            return Err(EnvError::observation_unavailable("camera", "mock failure"));
        }
        self.image_requests_log
            .push(requests.iter().map(|r| r.camera_label.clone()).collect());
        Ok(requests
            .iter()
            .map(|_| ImageResponse {
                height: self.config.image_height,
                width: self.config.image_width,
                data: self.frame_buffer(),
            })
            .collect())
    }
}
