//! Error types for xkcd-dl
//!
//! Every failure in the fetch/save/render flow maps to one variant of [`Error`]
//! and is propagated unchanged to the caller. Nothing is retried and no partial
//! result is returned.

use thiserror::Error;

/// Result type alias for xkcd-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for xkcd-dl
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "timeout")
        key: Option<String>,
    },

    /// Transport failure on either HTTP call (connect, timeout, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The metadata body was not valid JSON or did not match the comic schema
    #[error("failed to decode comic metadata: {0}")]
    Decode(#[from] serde_json::Error),

    /// Rendering a comic as JSON failed
    #[error("failed to encode comic as JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// I/O error while writing the image file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image request returned a non-success status
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// Status code returned by the server
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// No local file name can be derived from the image URL
    #[error("invalid image URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Why no file name could be derived
        reason: String,
    },
}

impl Error {
    /// Shorthand for a [`Error::Config`] tied to a configuration key
    pub fn config(key: &str, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }

    /// Whether this error came from the network layer
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    /// Whether the transport gave up because the request timeout elapsed
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Network(e) if e.is_timeout())
    }
}
