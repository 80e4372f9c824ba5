//! Error types for controller configuration.
//!
//! Pointer handling never fails; degraded conditions fall back silently.
//! Only configuration parsing and validation report errors.

use thiserror::Error;

/// Errors that can occur while loading or validating controller configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A size limit is negative or NaN
    #[error("Invalid {field}: {value}")]
    InvalidDimension { field: &'static str, value: f32 },

    /// A minimum exceeds its maximum
    #[error("{axis} minimum {min} exceeds maximum {max}")]
    MinExceedsMax { axis: &'static str, min: f32, max: f32 },

    /// Handle selector is empty
    #[error("Empty handle selector")]
    EmptySelector,
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
