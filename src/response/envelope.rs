// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Envelope of an IPX800 answer.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ApiError, ParseError};
use crate::protocol::Query;
use crate::response::Payload;

/// Value of `status` on a successful request.
pub const SUCCESS_STATUS: &str = "Success";

/// Value of `product` reported by supported controllers.
pub const EXPECTED_PRODUCT: &str = "IPX800_V4";

/// A decoded answer, split into envelope fields and payload.
///
/// `status` and `product` are kept as raw JSON: a non-string `status` is not
/// a success, a non-string `product` is a foreign one.
///
/// # Examples
///
/// ```
/// use ipx800_lib::response::Envelope;
///
/// let envelope = Envelope::parse(r#"{"product":"IPX800_V4","status":"Success","R1":1}"#).unwrap();
/// assert!(envelope.is_success());
/// assert_eq!(envelope.product(), Some("IPX800_V4"));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    status: Option<Value>,
    #[serde(default)]
    product: Option<Value>,
    #[serde(flatten)]
    values: Map<String, Value>,
}

impl Envelope {
    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not JSON, or
    /// `ParseError::UnexpectedFormat` if it is JSON but not an object.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        match serde_json::from_str::<Value>(body)? {
            object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
            other => Err(ParseError::UnexpectedFormat(format!(
                "expected a JSON object, got {}",
                json_type(&other)
            ))),
        }
    }

    /// Returns the reported status if it is a string.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().and_then(Value::as_str)
    }

    /// Returns the reported product identifier if it is a string.
    #[must_use]
    pub fn product(&self) -> Option<&str> {
        self.product.as_ref().and_then(Value::as_str)
    }

    /// Returns the raw `product` value, whatever its JSON type.
    #[must_use]
    pub fn product_value(&self) -> Option<&Value> {
        self.product.as_ref()
    }

    /// Returns whether the device accepted the request.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status() == Some(SUCCESS_STATUS)
    }

    /// Returns whether the product is present and not a supported one.
    #[must_use]
    pub fn is_foreign_product(&self) -> bool {
        self.product.is_some() && self.product() != Some(EXPECTED_PRODUCT)
    }

    /// Unwraps the payload of a successful answer to `query`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the status is missing or not `Success`.
    pub fn into_payload(self, query: &Query) -> Result<Payload, ApiError> {
        if self.is_success() {
            return Ok(Payload::new(self.values));
        }
        let status = self.status.map(|status| match status {
            Value::String(text) => text,
            other => other.to_string(),
        });
        Err(ApiError::new(query.to_string(), status))
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_envelope_from_payload() {
        let envelope =
            Envelope::parse(r#"{"product":"IPX800_V4","status":"Success","R1":1,"R2":0}"#)
                .unwrap();
        assert!(!envelope.is_foreign_product());
        let payload = envelope.into_payload(&Query::new()).unwrap();
        assert_eq!(payload.len(), 2);
        assert!(payload.get("status").is_none());
        assert!(payload.get("product").is_none());
    }

    #[test]
    fn error_status_is_api_error() {
        let envelope = Envelope::parse(r#"{"product":"IPX800_V4","status":"Error"}"#).unwrap();
        let query = Query::new().with("Get", "R");
        let err = envelope.into_payload(&query).unwrap_err();
        assert_eq!(err.status(), Some("Error"));
        assert_eq!(err.query(), "Get=R");
    }

    #[test]
    fn missing_status_is_api_error() {
        let envelope = Envelope::parse(r#"{"R1":1}"#).unwrap();
        assert_eq!(envelope.status(), None);
        let err = envelope.into_payload(&Query::new()).unwrap_err();
        assert_eq!(err.status(), None);
    }

    #[test]
    fn foreign_product_detected() {
        let envelope = Envelope::parse(r#"{"product":"IPX800_V3","status":"Success"}"#).unwrap();
        assert!(envelope.is_foreign_product());
        let envelope = Envelope::parse(r#"{"status":"Success"}"#).unwrap();
        assert!(!envelope.is_foreign_product());
    }

    #[test]
    fn rejects_non_json() {
        assert!(matches!(
            Envelope::parse("<html>busy</html>"),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn rejects_non_object() {
        match Envelope::parse("[1, 2]") {
            Err(ParseError::UnexpectedFormat(message)) => {
                assert_eq!(message, "expected a JSON object, got an array");
            }
            other => panic!("expected unexpected format, got {other:?}"),
        }
        assert!(matches!(
            Envelope::parse("\"Success\""),
            Err(ParseError::UnexpectedFormat(_))
        ));
    }

    #[test]
    fn non_string_status_is_api_error() {
        let envelope = Envelope::parse(r#"{"product":"IPX800_V4","status":0}"#).unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.status(), None);
        let err = envelope
            .into_payload(&Query::new().with("SetR", "1"))
            .unwrap_err();
        assert_eq!(err.status(), Some("0"));
        assert_eq!(err.query(), "SetR=1");
    }

    #[test]
    fn null_status_is_api_error_without_status() {
        let envelope = Envelope::parse(r#"{"status":null,"R1":1}"#).unwrap();
        let err = envelope.into_payload(&Query::new()).unwrap_err();
        assert_eq!(err.status(), None);
    }

    #[test]
    fn non_string_product_is_foreign() {
        let envelope = Envelope::parse(r#"{"product":4,"status":"Success","R1":1}"#).unwrap();
        assert!(envelope.is_foreign_product());
        assert_eq!(envelope.product(), None);
        assert_eq!(envelope.product_value(), Some(&Value::from(4)));
        let payload = envelope.into_payload(&Query::new()).unwrap();
        assert_eq!(payload.len(), 1);
        assert!(payload.get("product").is_none());
    }
}
