// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ipx800_lib` library.
//!
//! Failures fall into four groups: the HTTP exchange itself
//! ([`ProtocolError`]), an unreadable response body ([`ParseError`]), the
//! device refusing the request ([`ApiError`]), and a bad collection index
//! ([`IndexError`]). None of them are retried by the library.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP exchange failed (connection, timeout, HTTP status).
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The response body could not be interpreted.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The device answered with a status other than `Success`.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// A collection was indexed with an unusable index.
    #[error("index error: {0}")]
    Index(#[from] IndexError),
}

/// Errors related to the HTTP transport.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The device answered with a non-success HTTP status.
    #[error("HTTP {code} - {reason}")]
    Status {
        /// Numeric HTTP status code.
        code: u16,
        /// Canonical reason phrase, or `Unknown`.
        reason: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing IPX800 responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body is valid JSON but not an object.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),

    /// Expected key is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// A key holds a value of the wrong JSON type.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The key that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// The device rejected a request.
///
/// Carries the query that was sent (API key redacted) and the status the
/// device reported, `None` when the response had no `status` key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("device reported status {} for request `{query}`", .status.as_deref().unwrap_or("<none>"))]
pub struct ApiError {
    query: String,
    status: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    #[must_use]
    pub fn new(query: impl Into<String>, status: Option<String>) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    /// Returns the query parameters of the rejected request.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the status reported by the device.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

/// Errors raised when indexing a device collection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The index is not a non-negative integer.
    #[error("invalid index: {0}")]
    Invalid(String),

    /// The index is past the number of objects reported by the device.
    #[error("index {index} is out of range for a collection of {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The collection length.
        len: usize,
    },

    /// A slice was requested with a step of zero.
    #[error("slice step cannot be zero")]
    ZeroStep,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_display() {
        let err = IndexError::OutOfRange {
            index: 998,
            len: 56,
        };
        assert_eq!(
            err.to_string(),
            "index 998 is out of range for a collection of 56"
        );
    }

    #[test]
    fn error_from_index_error() {
        let err: Error = IndexError::ZeroStep.into();
        assert!(matches!(err, Error::Index(IndexError::ZeroStep)));
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("R12".to_string());
        assert_eq!(err.to_string(), "missing field in response: R12");
    }

    #[test]
    fn unexpected_format_display() {
        let err: Error = ParseError::UnexpectedFormat("expected a JSON object".to_string()).into();
        assert_eq!(
            err.to_string(),
            "parse error: unexpected response format: expected a JSON object"
        );
    }

    #[test]
    fn api_error_display() {
        let err = ApiError::new("Get=R", Some("Error".to_string()));
        assert_eq!(
            err.to_string(),
            "device reported status Error for request `Get=R`"
        );
        assert_eq!(err.query(), "Get=R");
        assert_eq!(err.status(), Some("Error"));
    }

    #[test]
    fn api_error_without_status() {
        let err = ApiError::new("SetR=4", None);
        assert_eq!(
            err.to_string(),
            "device reported status <none> for request `SetR=4`"
        );
    }
}
