// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Payload of a successful IPX800 answer.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::ParseError;

/// Object values returned by the device, with `status` and `product` removed.
///
/// # Examples
///
/// ```
/// use ipx800_lib::response::Envelope;
/// use ipx800_lib::protocol::Query;
///
/// let body = r#"{"status":"Success","A1":44591,"THL1-TEMP":21.5}"#;
/// let payload = Envelope::parse(body).unwrap().into_payload(&Query::new()).unwrap();
/// assert_eq!(payload.get_i64("A1").unwrap(), 44591);
/// assert_eq!(payload.get_f64("THL1-TEMP").unwrap(), 21.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    values: Map<String, Value>,
}

impl Payload {
    pub(crate) fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the payload holds no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of distinct objects, counting `THL1-TEMP` and
    /// `THL1-HUM` as one object.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.values
            .keys()
            .map(|key| key.split_once('-').map_or(key.as_str(), |(object, _)| object))
            .collect::<HashSet<_>>()
            .len()
    }

    /// Iterates over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns the raw value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns the integer value of `key`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the key is absent, or
    /// `ParseError::InvalidValue` if it is not an integer.
    pub fn get_i64(&self, key: &str) -> Result<i64, ParseError> {
        let value = self.require(key)?;
        value.as_i64().ok_or_else(|| ParseError::InvalidValue {
            field: key.to_string(),
            message: format!("expected an integer, got {value}"),
        })
    }

    /// Returns the numeric value of `key`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the key is absent, or
    /// `ParseError::InvalidValue` if it is not a number.
    pub fn get_f64(&self, key: &str) -> Result<f64, ParseError> {
        let value = self.require(key)?;
        value.as_f64().ok_or_else(|| ParseError::InvalidValue {
            field: key.to_string(),
            message: format!("expected a number, got {value}"),
        })
    }

    fn require(&self, key: &str) -> Result<&Value, ParseError> {
        self.values
            .get(key)
            .ok_or_else(|| ParseError::MissingField(key.to_string()))
    }
}
