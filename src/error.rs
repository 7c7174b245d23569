/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use thiserror::Error;

/// Errors raised by the client
///
/// Only transport level failures end up here. A response with a 4xx or 5xx
/// status is returned to the caller untouched.
#[derive(Debug, Error)]
pub enum DrsError {
    /// The server did not answer within the request timeout
    ///
    /// Covers the response phase only: a timeout while connecting is a
    /// [`DrsError::Connection`] and is not retried.
    #[error("request timed out: {0}")]
    Timeout(String),
    /// The connection could not be established
    #[error("connection error: {0}")]
    Connection(String),
    /// Any other failure reported by the HTTP stack
    #[error("http error: {0}")]
    Http(#[source] reqwest::Error),
    /// Body encoding or decoding failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The request could not be built, e.g. a malformed URL or header
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The blocking driver could not run the request
    #[error("runtime error: {0}")]
    Runtime(String),
}

impl DrsError {
    /// Returns true for read/response timeouts, the only retryable failure
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, DrsError::Timeout(_))
    }
}

impl From<reqwest::Error> for DrsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            return DrsError::Connection(e.to_string());
        }
        if e.is_timeout() {
            return DrsError::Timeout(e.to_string());
        }
        if e.is_builder() {
            return DrsError::InvalidRequest(e.to_string());
        }
        DrsError::Http(e)
    }
}

impl From<std::io::Error> for DrsError {
    fn from(e: std::io::Error) -> Self {
        DrsError::Runtime(e.to_string())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, DrsError>;
