// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for the IPX800 query API.
//!
//! Every interaction with the device is a single `GET` on
//! `/api/xdevices.json` carrying a handful of query parameters. The
//! [`Protocol`] trait is the seam between the device model and the wire:
//! [`HttpClient`] is the real implementation, tests substitute their own.

mod http;

pub use http::{DEFAULT_API_KEY, DEFAULT_TIMEOUT, HttpClient, HttpClientBuilder, HttpConfig};

use std::fmt;

use crate::error::ProtocolError;

/// Ordered query parameters for one API request.
///
/// The API key is not part of the query: the transport prepends it, since
/// some IPX800 firmware revisions ignore requests where `key` is not the
/// first parameter.
///
/// # Examples
///
/// ```
/// use ipx800_lib::protocol::Query;
///
/// let query = Query::new().with("SetR", "4");
/// assert_eq!(query.to_string(), "SetR=4");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter and returns the query.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Appends a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.push((key.into(), value.into()));
    }

    /// Returns the parameters in emission order.
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Returns the value of the first parameter named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Renders the URL-encoded form, `k1=v1&k2=v2`.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

/// Trait for transports able to carry an IPX800 API request.
pub trait Protocol {
    /// Sends one request and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request cannot be sent or the device
    /// answers with a non-success HTTP status.
    fn send(&self, query: &Query) -> Result<String, ProtocolError>;
}
