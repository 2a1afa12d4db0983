//! Observation - Assembler output
//!
//! Decoded, vehicle-frame observation record handed to the agent.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// One 2D point in the vehicle frame.
///
/// Produced from a raw (x, y, z) sensor triple by dropping z and swapping
/// axes: `x = raw.y`, `y = raw.x`. Forward is local x.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: f32,
    pub y: f32,
}

impl PlanarPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Bearing from the forward axis, in radians
    #[inline]
    pub fn bearing(&self) -> f32 {
        self.y.atan2(self.x)
    }
}

/// One commanded or observed steering state at one timestep
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SteeringCommand {
    /// Steering angle (rad, left positive)
    pub angle: f64,

    /// Steering angle rate (rad/s)
    pub steering_angle_velocity: f64,

    /// Commanded speed (m/s)
    pub speed: f64,
}

impl SteeringCommand {
    /// Placeholder command with all fields zeroed.
    ///
    /// Steering telemetry is not wired to a live sensor; the assembler emits
    /// this until it is.
    pub fn zeroed() -> Self {
        Self::default()
    }
}

/// One decoded camera frame: height x width x channels, 8-bit samples.
///
/// Invariant: `data.len() == height * width * channels`. Enforced at decode
/// time by the perception layer; a mismatched buffer never becomes a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFrame {
    /// Frame height in pixels
    pub height: u32,

    /// Frame width in pixels
    pub width: u32,

    /// Channel count, inferred from buffer size at decode time
    pub channels: u32,

    /// Row-major, channel-interleaved 8-bit samples
    pub data: Bytes,
}

impl ImageFrame {
    /// Sample value at (row, col, channel)
    #[inline]
    pub fn sample(&self, row: u32, col: u32, channel: u32) -> Option<u8> {
        if row >= self.height || col >= self.width || channel >= self.channels {
            return None;
        }
        let idx = ((row * self.width + col) * self.channels + channel) as usize;
        self.data.get(idx).copied()
    }
}

/// One merged observation, constructed fresh each cycle and owned by the
/// caller once returned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// LiDAR sample projected into the vehicle plane, sensor order
    pub lidar_points: Vec<PlanarPoint>,

    /// Steering state (currently a zeroed placeholder)
    pub steer: SteeringCommand,

    /// One decoded frame per configured viewpoint label, request order
    pub images: Vec<ImageFrame>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_indexing() {
        let frame = ImageFrame {
            height: 2,
            width: 2,
            channels: 3,
            data: Bytes::from((0u8..12).collect::<Vec<u8>>()),
        };
        assert_eq!(frame.sample(0, 0, 0), Some(0));
        assert_eq!(frame.sample(1, 1, 2), Some(11));
        assert_eq!(frame.sample(2, 0, 0), None);
        assert_eq!(frame.sample(0, 0, 3), None);
    }

    #[test]
    fn test_bearing() {
        let p = PlanarPoint::new(1.0, 1.0);
        assert!((p.bearing() - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }
}
