//! Simulator client abstraction
//!
//! Defines the trait for interacting with the car simulator, supporting a
//! real transport implementation and mock testing behind one interface.

use contracts::{CarControls, ImageRequest, ImageResponse, LidarData, Result};

/// Simulator client trait
///
/// Abstracts the capability set the environment consumes: connection
/// confirmation, API control arming, simulator-level reset, actuator
/// dispatch, and sensor reads. One handle is owned exclusively by one
/// environment instance and used sequentially; implementations do not need
/// internal locking.
pub trait SimClient: Send {
    /// Confirm the simulator is reachable.
    ///
    /// Called once at environment construction; a failure here is fatal
    /// (`ConnectionFailure`), no retry is attempted.
    fn confirm_connection(&mut self) -> Result<()>;

    /// Arm or disarm programmatic control of the car
    fn enable_api_control(&mut self, enabled: bool) -> Result<()>;

    /// Reset the simulation to its initial state.
    ///
    /// Physics needs a settle delay after this before sensors are sampled;
    /// the environment owns that timing.
    fn reset(&mut self) -> Result<()>;

    /// Apply one actuator command for the current tick
    fn set_car_controls(&mut self, controls: &CarControls) -> Result<()>;

    /// Fetch the latest LiDAR sample.
    ///
    /// May legitimately return an empty or truncated cloud while the sensor
    /// is warming up; callers re-poll.
    fn get_lidar_data(&mut self) -> Result<LidarData>;

    /// Fetch one raw frame per request, in request order
    fn get_images(&mut self, requests: &[ImageRequest]) -> Result<Vec<ImageResponse>>;
}
