//! Error types for the catalog client.
//!
//! # Design
//! `NotFound` gets its own variant because callers often need to tell "this
//! catalog does not exist" apart from "the server answered with an
//! unexpected status". When the server sends its JSON error object, the
//! decoded object is surfaced as `Scryfall` so its `details` reach the
//! caller. Any other non-2xx response becomes `HttpError` with the raw status
//! and body.

use thiserror::Error;

use crate::catalog::ScryfallError;

/// Errors returned by the client and its transport.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL cannot be used to build request URLs.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The server returned 404 without an error object.
    #[error("resource not found")]
    NotFound,

    /// The server returned its JSON error object.
    #[error("API error {}: {}", .0.status, .0.details)]
    Scryfall(ScryfallError),

    /// The server returned a non-2xx status without an error object.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// A 2xx response body could not be decoded into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request never produced a response (connect, DNS, timeout, read).
    #[error("transport failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A path segment that names no known catalog.
    #[error("unknown catalog: {0}")]
    UnknownCatalog(String),
}

impl ApiError {
    /// HTTP status reported by the server, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Scryfall(err) => Some(err.status),
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scryfall_error_display_uses_details() {
        let err = ApiError::Scryfall(ScryfallError {
            code: "not_found".to_string(),
            status: 404,
            details: "No catalog found".to_string(),
            kind: None,
            warnings: Vec::new(),
        });
        assert_eq!(err.to_string(), "API error 404: No catalog found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn transport_error_has_no_status() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ApiError::Transport(Box::new(io));
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "transport failed: refused");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn http_error_display() {
        let err = ApiError::HttpError {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: maintenance");
        assert_eq!(err.status(), Some(503));
    }
}
