//! Action and actuator command values
//!
//! The agent supplies an [`Action`]; the dispatcher lowers it into an
//! immutable [`CarControls`] value per step call. No shared mutable control
//! object is reused across calls.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Observation;

/// Agent action for one timestep
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Action {
    /// Steering angle command (rad, left positive)
    pub angle: f64,

    /// Speed command, mapped directly to throttle
    pub speed: f64,
}

impl Action {
    pub fn new(angle: f64, speed: f64) -> Self {
        Self { angle, speed }
    }
}

/// Actuator command for one simulator tick.
///
/// Built fresh from an [`Action`] on every step; field mapping is
/// speed -> throttle, angle -> steering.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CarControls {
    pub throttle: f64,
    pub steering: f64,
}

impl From<Action> for CarControls {
    fn from(action: Action) -> Self {
        Self {
            throttle: action.speed,
            steering: action.angle,
        }
    }
}

/// Result tuple of one environment step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    /// Observation assembled after the action settled
    pub observation: Observation,

    /// Reward for the previous action (constant 0 while the stub policy is in place)
    pub reward: f64,

    /// Whether the episode has ended
    pub done: bool,

    /// Auxiliary diagnostics, currently always empty
    pub info: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_lowers_to_controls() {
        let controls = CarControls::from(Action::new(0.3, 0.7));
        assert_eq!(controls.steering, 0.3);
        assert_eq!(controls.throttle, 0.7);
    }
}
