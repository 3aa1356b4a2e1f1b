//! # Mesh Errors
//!
//! Error types for solid generation and STL output.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while building or writing a solid.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A dimension or segment count cannot produce a closed solid
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Shape name does not match any known primitive
    #[error("Unknown shape: {name}")]
    UnknownShape { name: String },

    /// Random range configuration was rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing STL text to a sink failed
    #[error("STL write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an unknown shape error.
    pub fn unknown_shape(name: impl Into<String>) -> Self {
        Self::UnknownShape { name: name.into() }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Rejects dimensions that are zero, negative, NaN or infinite.
pub(crate) fn require_positive(name: &str, value: f64) -> MeshResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(format!(
            "{name} must be positive and finite: {value}"
        )))
    }
}

/// Rejects segment counts that cannot close a polygon.
pub(crate) fn require_segments(name: &str, value: u32) -> MeshResult<()> {
    let min = config::constants::MIN_SEGMENTS;
    if value >= min {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(format!(
            "{name} must be at least {min}: {value}"
        )))
    }
}
