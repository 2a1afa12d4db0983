//! # Config Loader
//!
//! Configuration loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON configuration files
//! - Validate configuration legality
//! - Generate `EnvBlueprint`
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let blueprint = ConfigLoader::load_from_path(Path::new("env.toml")).unwrap();
//! println!("History capacity: {}", blueprint.history_capacity);
//! ```

mod parser;
mod validator;

pub use contracts::EnvBlueprint;
pub use parser::ConfigFormat;

use contracts::EnvError;
use std::path::Path;

/// Configuration loader
///
/// Provides static methods to load configuration from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<EnvBlueprint, EnvError> {
        let format = Self::detect_format(path)?;
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load configuration from string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(content: &str, format: ConfigFormat) -> Result<EnvBlueprint, EnvError> {
        let blueprint = parser::parse(content, format)?;
        validator::validate(&blueprint)?;
        Ok(blueprint)
    }

    /// Serialize EnvBlueprint to TOML string
    pub fn to_toml(blueprint: &EnvBlueprint) -> Result<String, EnvError> {
        toml::to_string_pretty(blueprint)
            .map_err(|e| EnvError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize EnvBlueprint to JSON string
    pub fn to_json(blueprint: &EnvBlueprint) -> Result<String, EnvError> {
        serde_json::to_string_pretty(blueprint)
            .map_err(|e| EnvError::config_parse(format!("JSON serialize error: {e}")))
    }

    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, EnvError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            EnvError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext)
            .ok_or_else(|| EnvError::config_parse(format!("unsupported config format: .{ext}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_TOML: &str = r#"
observation_space = ["lidar", "steer", "img"]
action_space = ["angle", "speed"]
camera_labels = ["front_center"]
history_capacity = 500

[lidar]
max_attempts = 50
poll_interval_sec = 0.001

[steer_lock]
threshold = 0.05
amplification = 40
predicate = "literal"
"#;

    #[test]
    fn test_load_from_str_toml() {
        let result = ConfigLoader::load_from_str(MINIMAL_TOML, ConfigFormat::Toml);
        assert!(result.is_ok(), "Failed: {:?}", result.err());
        let bp = result.unwrap();
        assert_eq!(bp.history_capacity, 500);
        assert_eq!(bp.lidar.max_attempts, 50);
    }

    #[test]
    fn test_empty_config_gets_defaults() {
        let bp = ConfigLoader::load_from_str("", ConfigFormat::Toml).unwrap();
        assert_eq!(bp.camera_labels, vec!["front_center"]);
        assert_eq!(bp.reset_settle_sec, 1.0);
    }

    #[test]
    fn test_round_trip_toml() {
        let bp = ConfigLoader::load_from_str(MINIMAL_TOML, ConfigFormat::Toml).unwrap();
        let serialized = ConfigLoader::to_toml(&bp).unwrap();
        let bp2 = ConfigLoader::load_from_str(&serialized, ConfigFormat::Toml).unwrap();
        assert_eq!(bp.history_capacity, bp2.history_capacity);
        assert_eq!(bp.camera_labels, bp2.camera_labels);
        assert_eq!(bp.steer_lock.predicate, bp2.steer_lock.predicate);
    }

    #[test]
    fn test_round_trip_json() {
        let bp = ConfigLoader::load_from_str(MINIMAL_TOML, ConfigFormat::Toml).unwrap();
        let json = ConfigLoader::to_json(&bp).unwrap();
        let bp2 = ConfigLoader::load_from_str(&json, ConfigFormat::Json).unwrap();
        assert_eq!(bp.lidar.max_attempts, bp2.lidar.max_attempts);
    }

    #[test]
    fn test_validation_runs_after_parse() {
        // Zero history capacity should fail validation
        let content = "history_capacity = 0";
        let result = ConfigLoader::load_from_str(content, ConfigFormat::Toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("history_capacity"));
    }
}
