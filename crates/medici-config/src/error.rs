//! Configuration error types.

use std::{fmt, io};
use thiserror::Error;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// Path to the config file that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("Failed to parse config file at {path}: {source}")]
    ParseError {
        /// Path to the config file that failed to parse.
        path: String,
        /// Underlying TOML parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// Field that failed validation.
        field: String,
        /// Validation failure description.
        message: String,
    },

    /// Could not determine home directory.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// A section was asked for that the configuration does not have.
    #[error("No config section '{section}'; expected one of: {available}")]
    UnknownSection {
        /// Section that was asked for.
        section: String,
        /// Comma-separated names of the sections that exist.
        available: String,
    },

    /// Rendering the configuration for display failed.
    #[error("Failed to render config: {0}")]
    RenderError(String),
}

impl From<fmt::Error> for ConfigError {
    fn from(e: fmt::Error) -> Self {
        Self::RenderError(e.to_string())
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
