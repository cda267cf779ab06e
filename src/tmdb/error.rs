//! Failure taxonomy for movie fetches.

use thiserror::Error;

/// Errors returned by a single popular-movies fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("Could not reach the movie service: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Movie service returned HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// The body did not match the expected schema.
    #[error("Movie service sent an unreadable response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The configured base URL cannot be joined with the endpoint path.
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },
}

impl FetchError {
    /// HTTP status for `Server` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport(_) => true,
            FetchError::Server { status, .. } => *status == 429 || *status >= 500,
            FetchError::Decode(_) | FetchError::InvalidBaseUrl { .. } => false,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Server { .. } => "server",
            FetchError::Decode(_) => "decode",
            FetchError::InvalidBaseUrl { .. } => "config",
        }
    }
}
