//! Gateway error types.

use thiserror::Error;

/// Errors that can occur when talking to the data store.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP transport error (connection refused, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The data store answered with a non-success status.
    ///
    /// `message` is the response body, or `HTTP {status}` when the body is empty.
    #[error("request failed ({status}): {message}")]
    Request { status: u16, message: String },

    /// A JSON response body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

impl GatewayError {
    /// Whether this is a 404 from the data store.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Request { status: 404, .. })
    }
}
