//! Layered error definitions
//!
//! Categorized by source: config / simulator link / sensor pipeline / stubs

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum EnvError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse { message: String },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Simulator Link Errors =====
    /// Simulator handle not reachable at construction; fatal, no retry
    #[error("simulator connection failure: {message}")]
    ConnectionFailure { message: String },

    // ===== Sensor Errors =====
    /// LiDAR poll exceeded its retry bound; recoverable by re-invoking step/reset
    #[error("sensor '{sensor}' timed out after {attempts} poll attempts")]
    SensorTimeout { sensor: String, attempts: u32 },

    /// Malformed sensor payload, surfaced rather than silently coerced
    #[error("observation unavailable from '{sensor}': {message}")]
    ObservationUnavailable { sensor: String, message: String },

    // ===== Stubs =====
    /// Explicit signal for unfinished surfaces, to avoid masking missing policy logic
    #[error("not implemented: {feature}")]
    NotImplemented { feature: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl EnvError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create connection failure error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::ConnectionFailure {
            message: message.into(),
        }
    }

    /// Create sensor timeout error
    pub fn sensor_timeout(sensor: impl Into<String>, attempts: u32) -> Self {
        Self::SensorTimeout {
            sensor: sensor.into(),
            attempts,
        }
    }

    /// Create observation-unavailable error
    pub fn observation_unavailable(sensor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ObservationUnavailable {
            sensor: sensor.into(),
            message: message.into(),
        }
    }

    /// Create not-implemented error
    pub fn not_implemented(feature: impl Into<String>) -> Self {
        Self::NotImplemented {
            feature: feature.into(),
        }
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, EnvError>;
