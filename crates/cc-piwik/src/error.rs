//! Error types

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by an API request
#[derive(Debug, Error)]
pub enum Error {
    /// Non-success status code from the remote, with the response body as
    /// the message
    #[error("HTTP error ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body text
        message: String,
    },
    /// Transport failure before a response was received (DNS, connect)
    #[error("Network error: {0}")]
    Network(String),
    /// Request timeout
    #[error("Request timeout")]
    Timeout,
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() {
            Error::Network(err.to_string())
        } else if let Some(status) = err.status() {
            Error::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Error::Other(err.to_string())
        }
    }
}
