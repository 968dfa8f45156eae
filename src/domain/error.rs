//! Error types for explorer API operations.
//!
//! Every fetch concern in the application reports failures through
//! [`ApiError`]. The variants map one-to-one onto the user-facing messages
//! rendered by the pages, see [`ApiError::user_message`].

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for explorer API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested entity does not exist (HTTP 404).
    #[error("Transaction not found")]
    NotFound,

    /// The server answered with a non-success status.
    #[error("{message}")]
    FetchFailed {
        /// Message suitable for display.
        message: String,
    },

    /// The server answered successfully but the body carried no record.
    #[error("No transaction data received")]
    EmptyPayload,

    /// Transport-level errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },
}

impl ApiError {
    /// Create a new fetch failure with a display message.
    #[must_use]
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::FetchFailed {
            message: message.into(),
        }
    }

    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Message shown to the user for this error.
    ///
    /// Transport and parse failures are reported with the concern's generic
    /// fallback rather than leaking reqwest/serde internals into the UI.
    ///
    /// # Arguments
    ///
    /// * `fallback` - Generic message of the fetch concern that failed
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::NotFound | Self::EmptyPayload | Self::FetchFailed { .. } => self.to_string(),
            Self::Network(_) | Self::Parse { .. } => fallback.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
