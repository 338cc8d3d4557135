//! Configuration management
//!
//! Maskera runs with built-in defaults and optionally merges a TOML
//! configuration file on top. The configuration covers the two column
//! markers, the standard-value exemption set and logging.
//!
//! # Example
//!
//! ```toml
//! [columns]
//! alias_marker = "Alias"
//! username_marker = "Användarnamn"
//!
//! standard_values = ["Inget", "System user"]
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

use crate::domain::{MaskeraError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Cell values that mark the columns to anonymize
///
/// The markers are matched against trimmed cell values, not column headers;
/// exported reports often carry preamble rows so the real labels sit inside
/// the data area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMarkers {
    /// Marker identifying the alias/email column
    #[serde(default = "default_alias_marker")]
    pub alias_marker: String,

    /// Marker identifying the username column
    #[serde(default = "default_username_marker")]
    pub username_marker: String,
}

fn default_alias_marker() -> String {
    "Alias".to_string()
}

fn default_username_marker() -> String {
    "Användarnamn".to_string()
}

impl Default for ColumnMarkers {
    fn default() -> Self {
        Self {
            alias_marker: default_alias_marker(),
            username_marker: default_username_marker(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation ("daily" or "hourly")
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

/// Top-level Maskera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskeraConfig {
    /// Column marker values
    #[serde(default)]
    pub columns: ColumnMarkers,

    /// Sentinel values that pass through anonymization unchanged.
    ///
    /// These are structural labels (column-header-like strings, license type
    /// names) that can appear inside a targeted column without being PII.
    #[serde(default = "default_standard_values")]
    pub standard_values: BTreeSet<String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_standard_values() -> BTreeSet<String> {
    [
        "Access License Type",
        "Teammedlemmar",
        "Inget",
        "System user",
        "Mobility user",
        "Security Role",
        "Medius Adapter",
        "Alias",
        "Operations",
        "Aktivitet",
        "Användarnamn",
        "Nätverksdomän",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for MaskeraConfig {
    fn default() -> Self {
        Self {
            columns: ColumnMarkers::default(),
            standard_values: default_standard_values(),
            logging: LoggingConfig::default(),
        }
    }
}

impl MaskeraConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            MaskeraError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: MaskeraConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.columns.alias_marker.trim().is_empty() {
            return Err(MaskeraError::Configuration(
                "columns.alias_marker must not be empty".to_string(),
            ));
        }
        if self.columns.username_marker.trim().is_empty() {
            return Err(MaskeraError::Configuration(
                "columns.username_marker must not be empty".to_string(),
            ));
        }
        match self.logging.local_rotation.as_str() {
            "daily" | "hourly" => {}
            other => {
                return Err(MaskeraError::Configuration(format!(
                    "Invalid log rotation: {other}. Must be 'daily' or 'hourly'"
                )));
            }
        }
        Ok(())
    }

    /// Check whether a trimmed cell value is an exempt standard value
    pub fn is_standard_value(&self, value: &str) -> bool {
        self.standard_values.contains(value.trim())
    }
}

/// Load configuration, falling back to defaults when no file is given
/// or the default config file doesn't exist
pub fn load_config(path: &str) -> Result<MaskeraConfig> {
    if Path::new(path).exists() {
        tracing::debug!(path = %path, "Loading configuration file");
        MaskeraConfig::from_file(path)
    } else {
        tracing::debug!(path = %path, "No configuration file found, using defaults");
        Ok(MaskeraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_config_is_valid() {
        let config = MaskeraConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.columns.alias_marker, "Alias");
        assert_eq!(config.columns.username_marker, "Användarnamn");
    }

    #[test_case("Inget"; "sentinel word")]
    #[test_case("  Inget  "; "sentinel word with padding")]
    #[test_case("System user"; "license label")]
    #[test_case("Användarnamn"; "column label")]
    fn test_standard_values_exempt(value: &str) {
        let config = MaskeraConfig::default();
        assert!(config.is_standard_value(value));
    }

    #[test]
    fn test_regular_value_not_exempt() {
        let config = MaskeraConfig::default();
        assert!(!config.is_standard_value("anna.svensson"));
        assert!(!config.is_standard_value("anna.svensson@example.com"));
    }

    #[test]
    fn test_parse_toml_overrides() {
        let toml = r#"
            standard_values = ["N/A"]

            [columns]
            alias_marker = "Email"
            username_marker = "Login"

            [logging]
            local_enabled = true
            local_rotation = "hourly"
        "#;
        let config: MaskeraConfig = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.columns.alias_marker, "Email");
        assert_eq!(config.columns.username_marker, "Login");
        assert!(config.is_standard_value("N/A"));
        assert!(!config.is_standard_value("Inget"));
        assert!(config.logging.local_enabled);
    }

    #[test]
    fn test_empty_marker_rejected() {
        let mut config = MaskeraConfig::default();
        config.columns.alias_marker = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let mut config = MaskeraConfig::default();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let config = load_config("/nonexistent/maskera.toml").unwrap();
        assert_eq!(config.columns.alias_marker, "Alias");
    }
}
