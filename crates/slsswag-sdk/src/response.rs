//! HTTP response envelope returned by every handler

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::HandlerError;
use crate::normalize;

/// Response headers.
///
/// Ordered, so two envelopes built from the same inputs serialize to the
/// same bytes.
pub type Headers = BTreeMap<String, String>;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";

/// Message carried by the stub handler's 501 response.
pub const NOT_IMPLEMENTED_MESSAGE: &str = "not implemented!";

/// Headers applied when the caller supplies none.
pub fn default_headers() -> Headers {
    Headers::from([
        (CONTENT_TYPE.to_string(), "application/json".to_string()),
        (ALLOW_ORIGIN.to_string(), "*".to_string()),
    ])
}

/// The normalized envelope every handler hands back to the gateway.
///
/// Serializes as `{"statusCode": .., "headers": {..}, "body": ".."}`. `body`
/// is always text; an absent body means "no content" and is left out of the
/// serialized envelope, which is not the same as an empty string.
///
/// # Quick Reference
///
/// | Method | Status | Use Case |
/// |--------|--------|----------|
/// | `build(status, headers, body)` | any | Typed payload, serialization may fail |
/// | `from_json(status, headers, body)` | any | Payload already held as JSON |
/// | `ok(body)` | 200 | Successful response |
/// | `no_content()` | 204 | Nothing to return |
/// | `error(status, msg)` | any | `{"error": msg}` body |
/// | `not_implemented()` | 501 | Default body of a fresh function |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// HTTP status code, not validated
    pub status_code: u16,

    /// Response headers
    #[serde(default)]
    pub headers: Headers,

    /// Serialized response body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Response {
    /// Build an envelope from a status code, optional headers and an optional
    /// payload.
    ///
    /// Missing headers fall back to [`default_headers`]; supplied headers are
    /// used as they are. The payload is serialized with lower camel case keys
    /// and without null fields. A missing payload leaves the body absent.
    ///
    /// # Example
    /// ```ignore
    /// #[derive(Serialize)]
    /// struct Pet { pet_id: u64, nickname: Option<String> }
    ///
    /// let response = Response::build(200, None, Some(&pet))?;
    /// // body: {"petId":1}
    /// ```
    pub fn build<T: Serialize + ?Sized>(
        status_code: u16,
        headers: Option<Headers>,
        body: Option<&T>,
    ) -> Result<Self, HandlerError> {
        let body = body.map(normalize::to_normalized_value).transpose()?;
        Ok(Self::from_json(status_code, headers, body))
    }

    /// Same as [`Response::build`] for a payload that is already JSON. Cannot
    /// fail.
    pub fn from_json(status_code: u16, headers: Option<Headers>, body: Option<Value>) -> Self {
        Self {
            status_code,
            headers: headers.unwrap_or_else(default_headers),
            body: body.map(|value| normalize::normalize(value).to_string()),
        }
    }

    /// Create a response with default headers and no body.
    ///
    /// # Example
    /// ```ignore
    /// Response::new(204)
    /// Response::new(301).with_header("Location", "/new-path")
    /// ```
    pub fn new(status_code: u16) -> Self {
        Self::from_json(status_code, None, None)
    }

    /// Create a JSON response with a custom status code.
    ///
    /// # Example
    /// ```ignore
    /// Response::json(201, json!({"pet_id": 7})) // body: {"petId":7}
    /// ```
    pub fn json(status_code: u16, body: Value) -> Self {
        Self::from_json(status_code, None, Some(body))
    }

    /// Create a 200 OK response with JSON body.
    pub fn ok(body: Value) -> Self {
        Self::json(200, body)
    }

    /// Create a 204 No Content response.
    pub fn no_content() -> Self {
        Self::new(204)
    }

    /// Create a plain text response. The body is stored verbatim.
    pub fn text(status_code: u16, body: impl Into<String>) -> Self {
        Self::new(status_code)
            .with_header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .with_body(body)
    }

    /// Create a binary response (for files, images, etc.).
    ///
    /// The data is base64-encoded so the body stays textual; the gateway
    /// decodes it when it sees `X-Binary-Response: base64`.
    ///
    /// # Example
    /// ```ignore
    /// Response::binary(200, image_bytes, "image/png")
    /// ```
    pub fn binary(status_code: u16, data: impl AsRef<[u8]>, content_type: impl Into<String>) -> Self {
        use base64::Engine;
        let encoded = base64::engine::general_purpose::STANDARD.encode(data.as_ref());

        Self::new(status_code)
            .with_header(CONTENT_TYPE, content_type)
            .with_header("X-Binary-Response", "base64")
            .with_body(encoded)
    }

    /// Create an error response with an `{"error": message}` body.
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self::json(status_code, serde_json::json!({ "error": message.into() }))
    }

    /// The response of a handler nobody has written yet: 501 with
    /// `{"message":"not implemented!"}`.
    pub fn not_implemented() -> Self {
        Self::json(501, serde_json::json!({ "message": NOT_IMPLEMENTED_MESSAGE }))
    }

    /// Add a header to the response (builder pattern).
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set an already serialized body (builder pattern).
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Add CORS headers for cross-origin requests.
    ///
    /// # Example
    /// ```ignore
    /// Response::ok(data).with_cors("https://myapp.com")
    /// ```
    pub fn with_cors(self, origin: impl Into<String>) -> Self {
        self.with_header(ALLOW_ORIGIN, origin)
            .with_header("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS")
            .with_header("Access-Control-Allow-Headers", "Content-Type, Authorization")
    }

    /// Get a header value (case-insensitive lookup).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Parse the body back into JSON. `Ok(None)` when there is no body.
    pub fn json_body(&self) -> Result<Option<Value>, serde_json::Error> {
        self.body.as_deref().map(serde_json::from_str).transpose()
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(200)
    }
}
