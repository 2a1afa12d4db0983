//! Configuration validation
//!
//! Rules:
//! - observation_space / action_space non-empty, no duplicate entries
//! - camera_labels non-empty (and labels themselves non-blank) when img is observed
//! - history_capacity > 0
//! - settle durations >= 0 and finite
//! - lidar.max_attempts > 0, poll_interval_sec >= 0
//! - steer_lock.threshold > 0, amplification > 0

use std::collections::HashSet;

use contracts::{EnvBlueprint, EnvError};

/// Validate an EnvBlueprint
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(blueprint: &EnvBlueprint) -> Result<(), EnvError> {
    validate_spaces(blueprint)?;
    validate_cameras(blueprint)?;
    validate_history(blueprint)?;
    validate_timing(blueprint)?;
    validate_lidar(blueprint)?;
    validate_steer_lock(blueprint)?;
    Ok(())
}

/// Observation/action spaces must be non-empty and duplicate-free
fn validate_spaces(blueprint: &EnvBlueprint) -> Result<(), EnvError> {
    if blueprint.observation_space.is_empty() {
        return Err(EnvError::config_validation(
            "observation_space",
            "must name at least one observation channel",
        ));
    }
    let mut seen = HashSet::new();
    for kind in &blueprint.observation_space {
        if !seen.insert(kind) {
            return Err(EnvError::config_validation(
                "observation_space",
                format!("duplicate entry {kind:?}"),
            ));
        }
    }

    if blueprint.action_space.is_empty() {
        return Err(EnvError::config_validation(
            "action_space",
            "must name at least one action field",
        ));
    }
    let mut seen = HashSet::new();
    for kind in &blueprint.action_space {
        if !seen.insert(kind) {
            return Err(EnvError::config_validation(
                "action_space",
                format!("duplicate entry {kind:?}"),
            ));
        }
    }
    Ok(())
}

/// Camera labels must exist when images are observed
fn validate_cameras(blueprint: &EnvBlueprint) -> Result<(), EnvError> {
    if !blueprint.wants_images() {
        return Ok(());
    }
    if blueprint.camera_labels.is_empty() {
        return Err(EnvError::config_validation(
            "camera_labels",
            "img is in observation_space but no viewpoint labels are configured",
        ));
    }
    for (idx, label) in blueprint.camera_labels.iter().enumerate() {
        if label.trim().is_empty() {
            return Err(EnvError::config_validation(
                format!("camera_labels[{idx}]"),
                "viewpoint label cannot be blank",
            ));
        }
    }
    Ok(())
}

fn validate_history(blueprint: &EnvBlueprint) -> Result<(), EnvError> {
    if blueprint.history_capacity == 0 {
        return Err(EnvError::config_validation(
            "history_capacity",
            "must be > 0",
        ));
    }
    Ok(())
}

/// Settle durations are real-time sleeps; they must be finite and non-negative
fn validate_timing(blueprint: &EnvBlueprint) -> Result<(), EnvError> {
    for (field, value) in [
        ("reset_settle_sec", blueprint.reset_settle_sec),
        ("step_settle_sec", blueprint.step_settle_sec),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(EnvError::config_validation(
                field,
                format!("must be finite and >= 0, got {value}"),
            ));
        }
    }
    Ok(())
}

fn validate_lidar(blueprint: &EnvBlueprint) -> Result<(), EnvError> {
    let lidar = &blueprint.lidar;
    if lidar.max_attempts == 0 {
        return Err(EnvError::config_validation(
            "lidar.max_attempts",
            "must be > 0; an unbounded poll loop is not permitted",
        ));
    }
    if !lidar.poll_interval_sec.is_finite() || lidar.poll_interval_sec < 0.0 {
        return Err(EnvError::config_validation(
            "lidar.poll_interval_sec",
            format!("must be finite and >= 0, got {}", lidar.poll_interval_sec),
        ));
    }
    Ok(())
}

fn validate_steer_lock(blueprint: &EnvBlueprint) -> Result<(), EnvError> {
    let lock = &blueprint.steer_lock;
    if !lock.threshold.is_finite() || lock.threshold <= 0.0 {
        return Err(EnvError::config_validation(
            "steer_lock.threshold",
            format!("must be finite and > 0, got {}", lock.threshold),
        ));
    }
    if lock.amplification == 0 {
        return Err(EnvError::config_validation(
            "steer_lock.amplification",
            "must be > 0",
        ));
    }
    Ok(())
}
