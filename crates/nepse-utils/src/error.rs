//! Error types for nepse-utils

use thiserror::Error;

/// Result type alias for nepse-utils
pub type Result<T> = std::result::Result<T, UtilsError>;

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error)]
pub enum UtilsError {
    /// A required variable is unset or empty
    #[error("{0} not set")]
    MissingVar(String),

    /// A variable is set but cannot be parsed
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidVar {
        key: String,
        value: String,
        reason: String,
    },
}
