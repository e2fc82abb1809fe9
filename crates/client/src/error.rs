//! Error types shared by the API client and the session store.

use thiserror::Error;

/// Failures surfaced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never completed: connection refused, DNS failure,
    /// timeout, or a malformed response body at the transport level.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Http {
        /// Numeric HTTP status code.
        status: u16,
        /// Message body sent by the server, possibly empty.
        message: String,
    },

    /// Stored session text could not be deserialized.
    #[error("failed to parse stored data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A form-level check failed before any request was made.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Reading or writing the local session file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Loading the client configuration failed.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    /// Numeric status code when the server rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
