//! HTTP response handling for the Pipefy API client.
//!
//! This module provides the [`HttpResponse`] type, which holds one raw
//! answer from the endpoint and decides whether it is a success or one of
//! the [`PipefyError`] failure kinds.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::{PipefyError, RATE_LIMITED_MESSAGE};

/// Marker that identifies an HTML error page, compared case-insensitively.
pub const HTML_DOCTYPE_MARKER: &str = "doctype html";

/// A raw response from the Pipefy GraphQL endpoint.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use pipefy_api::clients::HttpResponse;
///
/// let response = HttpResponse::new(200, HashMap::new(), r#"{"data": {"me": {"id": 1}}}"#);
/// let envelope = response.classify().unwrap();
/// assert_eq!(envelope["data"]["me"]["id"], 1);
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The undecoded response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` when the status is the canonical `200 OK`.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Classifies the response, returning the decoded envelope on success.
    ///
    /// Checks run in this order, and the first that matches decides:
    ///
    /// 1. Body is not JSON: [`PipefyError::MalformedResponse`]
    /// 2. Top-level `error` is set: [`PipefyError::Api`] with
    ///    `error_description`, falling back to `error`
    /// 3. `errors` is non-empty: [`PipefyError::Api`] with the first entry's `message`
    /// 4. Status is not 200: [`PipefyError::Api`] with
    ///    `error_description`, falling back to `error`
    /// 5. Body mentions an HTML doctype: [`PipefyError::RateLimited`]
    ///
    /// # Errors
    ///
    /// Returns the [`PipefyError`] chosen by the first matching check.
    pub fn classify(&self) -> Result<Value, PipefyError> {
        let envelope: Value =
            serde_json::from_str(&self.body).map_err(|_| PipefyError::MalformedResponse {
                body: self.body.clone(),
            })?;

        if let Some(error) = envelope.get("error").filter(|v| is_set(v)) {
            return Err(PipefyError::Api {
                message: describe_error(&envelope).unwrap_or_else(|| text_of(error)),
            });
        }

        if let Some(message) = envelope.get("errors").and_then(first_error_message) {
            return Err(PipefyError::Api { message });
        }

        if !self.is_ok() {
            let message = describe_error(&envelope)
                .unwrap_or_else(|| format!("HTTP {} returned by Pipefy", self.code));
            return Err(PipefyError::Api { message });
        }

        if envelope
            .to_string()
            .to_ascii_lowercase()
            .contains(HTML_DOCTYPE_MARKER)
        {
            return Err(PipefyError::RateLimited {
                message: RATE_LIMITED_MESSAGE.to_string(),
            });
        }

        Ok(envelope)
    }
}

/// JSON truthiness: `null`, `false`, `""`, `[]` and `{}` count as unset.
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Number(_) => true,
    }
}

fn text_of(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), ToString::to_string)
}

fn describe_error(envelope: &Value) -> Option<String> {
    envelope
        .get("error_description")
        .filter(|v| is_set(v))
        .map(text_of)
}

fn first_error_message(errors: &Value) -> Option<String> {
    if !is_set(errors) {
        return None;
    }
    let first = match errors {
        Value::Array(items) => items.first()?,
        other => other,
    };
    Some(first.get("message").map_or_else(|| text_of(first), text_of))
}
