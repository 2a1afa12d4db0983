//! Raw sensor payloads - SimClient output
//!
//! Wire-facing structures returned by the simulator boundary, before any
//! decoding or frame transformation.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// One raw LiDAR sample.
///
/// The point cloud is a flat sequence of (x, y, z) scalar triples in sensor
/// order. The simulator may return an empty or truncated cloud while the
/// sensor is still spinning up; consumers are responsible for re-polling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LidarData {
    /// Flat scalar sequence, 3 values per point
    pub point_cloud: Vec<f32>,
}

impl LidarData {
    /// Create a sample from a flat scalar sequence
    pub fn new(point_cloud: Vec<f32>) -> Self {
        Self { point_cloud }
    }

    /// Number of raw scalars (NOT points) in the sample
    #[inline]
    pub fn len(&self) -> usize {
        self.point_cloud.len()
    }

    /// Whether the sample carries no scalars at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.point_cloud.is_empty()
    }

    /// Whether the sample contains at least one complete 3D point
    #[inline]
    pub fn has_points(&self) -> bool {
        self.point_cloud.len() >= 3
    }
}

/// Request for one camera frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    /// Viewpoint label selecting which camera mount to query
    pub camera_label: String,
}

impl ImageRequest {
    /// Request an uncompressed scene capture from the named mount
    pub fn scene(camera_label: impl Into<String>) -> Self {
        Self {
            camera_label: camera_label.into(),
        }
    }
}

/// One raw camera response: declared dimensions plus an undecoded byte buffer.
///
/// The buffer length is NOT validated here; decoding into an
/// [`ImageFrame`](crate::ImageFrame) checks it against `height * width`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    /// Declared frame height in pixels
    pub height: u32,

    /// Declared frame width in pixels
    pub width: u32,

    /// Raw 8-bit samples, row-major, channels interleaved
    pub data: Bytes,
}
