//! Unified error types for ceylon.
//!
//! Every content service maps its failures into one of these variants at its
//! boundary, so the front end only ever sees a single, human-readable error.

use crate::config::ConfigError;

/// Message used when a transport failure carries no detail of its own.
const GENERIC_FAILURE: &str = "an unknown error occurred";

/// Unified error type for ceylon content operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input was empty or whitespace-only.
    #[error("{0}")]
    InvalidInput(String),

    /// The model's text was not valid JSON.
    #[error("failed to parse JSON response; please try again")]
    Parse(String),

    /// JSON parsed, but required keys or fields were absent.
    #[error("invalid response format: {0}")]
    InvalidFormat(String),

    /// The model returned a blank payload after extraction.
    #[error("model returned an empty {0}")]
    EmptyContent(String),

    /// The remote call failed.
    #[error("{operation} failed: {message}")]
    Transport { operation: &'static str, message: String },

    /// Configuration could not be loaded or validated.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Input validation error for a missing topic.
    pub fn topic_required() -> Self {
        Error::InvalidInput("topic required".into())
    }

    /// Wrap a transport failure with the name of the operation that failed.
    ///
    /// Blank messages are replaced with a generic fallback.
    pub fn transport(operation: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() { GENERIC_FAILURE.to_string() } else { message };
        Error::Transport { operation, message }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "INVALID_INPUT",
            Error::Parse(_) => "PARSE_ERROR",
            Error::InvalidFormat(_) => "INVALID_FORMAT",
            Error::EmptyContent(_) => "EMPTY_CONTENT",
            Error::Transport { .. } => "TRANSPORT_ERROR",
            Error::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether re-issuing the same request could succeed.
    ///
    /// Nothing in ceylon retries automatically; this only informs the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Parse(_) | Error::EmptyContent(_) | Error::Transport { .. })
    }
}
