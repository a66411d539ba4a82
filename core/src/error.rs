//! Error types for the Wormholescan client.
//!
//! # Design
//! Three kinds come straight from the request/response cycle: a timeout, a
//! refused or failed connection, and a 4xx/5xx status. The messages for the
//! first two are fixed strings. `Decode` covers a success status whose body
//! is not JSON, and `Transport` carries any other ureq failure untouched.

use thiserror::Error;

/// Errors returned by `RequestExecutor` and the API facades.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not complete within the configured timeout.
    #[error("Timeout error occurred.")]
    Timeout,

    /// A connection to the server could not be established.
    #[error("Connection error occurred.")]
    ConnectionFailure,

    /// The server answered with a 4xx or 5xx status.
    #[error("HTTPError: {message}")]
    HttpStatus {
        status: u16,
        message: String,
        body: String,
    },

    /// The response body is not valid JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(ureq::Error),
}

impl ApiError {
    /// Status code of an `HttpStatus` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
