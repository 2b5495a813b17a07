//! Error types for timezone-dl
//!
//! The taxonomy mirrors the pipeline stages: download (terminal HTTP
//! status), network transport, JSON parsing, CSV serialization, and
//! filesystem output, plus configuration validation.

use thiserror::Error;

/// Result type alias for timezone-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for timezone-dl
#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint answered with a terminal non-200 status.
    ///
    /// For statuses in the transient set ({500, 502, 503, 504}) this is
    /// produced only after the retry budget is exhausted; any other
    /// status produces it immediately.
    #[error("download failed: server returned HTTP status {status}")]
    Download {
        /// The HTTP status code of the final response
        status: u16,
    },

    /// Transport-level HTTP failure (connect, timeout, TLS, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body is not a JSON array of timezone records
    #[error("failed to parse response body as JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// CSV serialization failed
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// Output directory or file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of the invalid setting
        message: String,
    },
}

impl Error {
    /// Shorthand constructor for configuration errors
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
