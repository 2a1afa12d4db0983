//! # Perception
//!
//! Sensor payload processing: planar projection of LiDAR point clouds, the
//! bounded LiDAR acquisition loop, and camera frame decoding.
//!
//! Everything here is pull-based and synchronous: the caller polls, this
//! crate transforms. No channels, no background tasks.

pub mod geometry;
pub mod image;
pub mod lidar;

pub use geometry::to_planar;
pub use image::{decode_frame, decode_frames};
pub use lidar::LidarPipeline;
