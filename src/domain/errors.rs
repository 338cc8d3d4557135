//! Domain error types
//!
//! This module defines the error hierarchy for Maskera. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Maskera error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum MaskeraError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Spreadsheet reading/writing errors
    #[error("Sheet error: {0}")]
    Sheet(String),

    /// Mapping file errors
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for MaskeraError {
    fn from(err: std::io::Error) -> Self {
        MaskeraError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for MaskeraError {
    fn from(err: serde_json::Error) -> Self {
        MaskeraError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for MaskeraError {
    fn from(err: toml::de::Error) -> Self {
        MaskeraError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from calamine errors
impl From<calamine::Error> for MaskeraError {
    fn from(err: calamine::Error) -> Self {
        MaskeraError::Sheet(err.to_string())
    }
}

// Conversion from rust_xlsxwriter errors
impl From<rust_xlsxwriter::XlsxError> for MaskeraError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        MaskeraError::Sheet(err.to_string())
    }
}
