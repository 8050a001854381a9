//! Error types for lane-core.
//!
//! Query and controller operations are total and never return these; errors
//! only come from the outer edges (seed files, export files, configuration).

use thiserror::Error;

use crate::config::ConfigValidationError;

/// Result type alias using lane-core Error
pub type LaneResult<T> = std::result::Result<T, LaneError>;

/// Errors raised at the I/O boundary of the timeline
#[derive(Error, Debug)]
pub enum LaneError {
    /// Configuration rejected by validation
    #[error("configuration error: {0}")]
    Config(#[from] ConfigValidationError),

    /// Seed fixture has the wrong shape
    #[error("invalid seed file {path}: {message}")]
    InvalidSeed { path: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LaneError {
    /// Create an invalid seed error
    pub fn invalid_seed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSeed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this error came from a malformed seed file
    pub fn is_invalid_seed(&self) -> bool {
        matches!(self, Self::InvalidSeed { .. })
    }
}
