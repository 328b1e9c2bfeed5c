//! Error types for the API client.

use std::time::Duration;

/// Errors that can occur when building the client or making API requests.
///
/// Configuration and parameter errors are returned before any network
/// activity. Everything else comes out of the request itself.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client was built without an API key.
    #[error("Token not specified")]
    MissingToken,
    /// The base URL override could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
    /// An endpoint was called without any query parameters.
    #[error("Parameters is not specified")]
    MissingParameters,
    /// The request did not complete before the configured deadline.
    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    /// The API answered with anything other than `200 OK`.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The request failed at the transport level.
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
}

impl Error {
    /// `true` if the deadline elapsed before the response arrived.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }

    /// `true` for non-200 responses and transport failures.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Error::HttpStatus { .. } | Error::RequestFailed(_))
    }

    /// `true` for errors raised while constructing the client.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::MissingToken | Error::InvalidBaseUrl(_))
    }

    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Error::MissingParameters)
    }

    /// HTTP status of a non-200 response, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
