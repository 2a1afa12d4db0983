//! EnvBlueprint - Config Loader output
//!
//! Describes the full environment configuration: observation/action spaces,
//! camera mounts, LiDAR polling discipline, steering-lock recording, settle
//! timing.

use serde::{Deserialize, Serialize};

/// Observation channels the environment can expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationKind {
    Lidar,
    Steer,
    Img,
}

/// Action fields the environment accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Angle,
    Speed,
}

/// Steering-lock trigger predicate.
///
/// The reference behavior checks `|angle| > threshold && angle < -threshold`,
/// which can only hold for angles below `-threshold`; a positive lock never
/// records. `Magnitude` is the inferred correction (`|angle| > threshold`)
/// and is opt-in only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockPredicate {
    /// Reference behavior, preserved as-is
    #[default]
    Literal,
    /// Magnitude-only check
    Magnitude,
}

/// LiDAR polling discipline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LidarPollConfig {
    /// Maximum poll attempts before surfacing `SensorTimeout`
    #[serde(default = "default_lidar_max_attempts")]
    pub max_attempts: u32,

    /// Sleep between polls, seconds; 0 retries immediately
    #[serde(default)]
    pub poll_interval_sec: f64,

    /// Sort planar points by bearing after the transform. The reference
    /// pipeline leaves points in sensor order; this is an opt-in extension.
    #[serde(default)]
    pub sort_by_bearing: bool,
}

fn default_lidar_max_attempts() -> u32 {
    100
}

impl Default for LidarPollConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_lidar_max_attempts(),
            poll_interval_sec: 0.0,
            sort_by_bearing: false,
        }
    }
}

/// Steering-lock recording configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteerLockConfig {
    /// Steering angle magnitude past which a command counts as locked
    #[serde(default = "default_lock_threshold")]
    pub threshold: f64,

    /// Copies appended per recorded command, weighting it for the
    /// reverse-maneuver heuristic
    #[serde(default = "default_lock_amplification")]
    pub amplification: usize,

    /// Trigger predicate; `literal` preserves the reference behavior
    #[serde(default)]
    pub predicate: LockPredicate,
}

fn default_lock_threshold() -> f64 {
    0.05
}

fn default_lock_amplification() -> usize {
    40
}

impl Default for SteerLockConfig {
    fn default() -> Self {
        Self {
            threshold: default_lock_threshold(),
            amplification: default_lock_amplification(),
            predicate: LockPredicate::default(),
        }
    }
}

/// Full environment configuration blueprint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvBlueprint {
    /// Observation channels, in record order
    #[serde(default = "default_observation_space")]
    pub observation_space: Vec<ObservationKind>,

    /// Accepted action fields
    #[serde(default = "default_action_space")]
    pub action_space: Vec<ActionKind>,

    /// Viewpoint labels to query per observation cycle, request order
    #[serde(default = "default_camera_labels")]
    pub camera_labels: Vec<String>,

    /// Steering-history capacity; oldest entries are evicted FIFO
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Settle delay after a simulator-level reset, seconds
    #[serde(default = "default_reset_settle_sec")]
    pub reset_settle_sec: f64,

    /// Settle delay after dispatching actuator controls, seconds
    #[serde(default = "default_step_settle_sec")]
    pub step_settle_sec: f64,

    /// LiDAR polling discipline
    #[serde(default)]
    pub lidar: LidarPollConfig,

    /// Steering-lock recording
    #[serde(default)]
    pub steer_lock: SteerLockConfig,
}

fn default_observation_space() -> Vec<ObservationKind> {
    vec![
        ObservationKind::Lidar,
        ObservationKind::Steer,
        ObservationKind::Img,
    ]
}

fn default_action_space() -> Vec<ActionKind> {
    vec![ActionKind::Angle, ActionKind::Speed]
}

fn default_camera_labels() -> Vec<String> {
    vec!["front_center".to_string()]
}

fn default_history_capacity() -> usize {
    500
}

fn default_reset_settle_sec() -> f64 {
    1.0
}

fn default_step_settle_sec() -> f64 {
    0.01
}

impl Default for EnvBlueprint {
    fn default() -> Self {
        Self {
            observation_space: default_observation_space(),
            action_space: default_action_space(),
            camera_labels: default_camera_labels(),
            history_capacity: default_history_capacity(),
            reset_settle_sec: default_reset_settle_sec(),
            step_settle_sec: default_step_settle_sec(),
            lidar: LidarPollConfig::default(),
            steer_lock: SteerLockConfig::default(),
        }
    }
}

impl EnvBlueprint {
    /// Blueprint with both settle delays zeroed, for tests that should not
    /// spend wall-clock time in real sleeps
    pub fn without_settles() -> Self {
        Self {
            reset_settle_sec: 0.0,
            step_settle_sec: 0.0,
            ..Self::default()
        }
    }

    /// Whether camera frames are part of the observation
    pub fn wants_images(&self) -> bool {
        self.observation_space.contains(&ObservationKind::Img)
    }
}
