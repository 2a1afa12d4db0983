//! Configuration parsing
//!
//! Supports TOML (primary) and JSON (optional) formats.

use contracts::{EnvBlueprint, EnvError};

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (recommended)
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Infer format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse TOML configuration
pub fn parse_toml(content: &str) -> Result<EnvBlueprint, EnvError> {
    toml::from_str(content).map_err(|e| EnvError::config_parse(format!("TOML parse error: {e}")))
}

/// Parse JSON configuration
pub fn parse_json(content: &str) -> Result<EnvBlueprint, EnvError> {
    serde_json::from_str(content)
        .map_err(|e| EnvError::config_parse(format!("JSON parse error: {e}")))
}

/// Parse configuration in the given format
pub fn parse(content: &str, format: ConfigFormat) -> Result<EnvBlueprint, EnvError> {
    match format {
        ConfigFormat::Toml => parse_toml(content),
        ConfigFormat::Json => parse_json(content),
    }
}
