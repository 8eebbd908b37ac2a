//! Error types for quote lookups and bot plumbing

use crate::model::QuoteField;
use thiserror::Error;

/// Quote relay specific errors
///
/// Every variant on the fetch path is collapsed to "not found" before it
/// reaches a user; the variants exist so the logs can tell causes apart.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Upstream answered with a non-success status
    #[error("HTTP status {status} for {symbol}")]
    Status {
        symbol: String,
        status: u16,
    },

    /// Upstream could not be reached in time
    #[error("Upstream unreachable for {symbol}: {reason}")]
    Unreachable {
        symbol: String,
        reason: String,
    },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body could not be decoded as text
    #[error("Decode error for {symbol}: {reason}")]
    Decode {
        symbol: String,
        reason: String,
    },

    /// A required element is missing from the quote page
    #[error("Missing field {} for {symbol}", .field.element_id())]
    MissingField {
        symbol: String,
        field: QuoteField,
    },

    /// Element selector could not be built
    #[error("Selector error: {0}")]
    Selector(String),

    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chat input could not be turned into a command
    #[error("Command error: {0}")]
    Command(String),

    /// Telegram Bot API rejected a call
    #[error("Telegram error: {0}")]
    Telegram(String),
}

impl QuoteError {
    /// Classify a transport error, separating timeouts and refused connections
    pub fn from_transport(symbol: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            Self::Unreachable {
                symbol: symbol.to_string(),
                reason: err.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }
}

/// Result type alias for quote operations
pub type Result<T> = std::result::Result<T, QuoteError>;

impl From<nepse_utils::UtilsError> for QuoteError {
    fn from(err: nepse_utils::UtilsError) -> Self {
        Self::Config(err.to_string())
    }
}
