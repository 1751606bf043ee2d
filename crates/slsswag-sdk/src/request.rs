//! Invocation inputs handed to a handler
//!
//! Both values are supplied by whatever runtime invokes the function and
//! either may be missing entirely, so handlers receive them as `Option`s.

use crate::error::HandlerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents an incoming HTTP request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    #[serde(default)]
    pub method: String,

    /// Request path (e.g., "/pets/123")
    #[serde(default)]
    pub path: String,

    /// Query parameters
    #[serde(default)]
    pub query: HashMap<String, String>,

    /// HTTP headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Request body
    #[serde(default)]
    pub body: Option<String>,

    /// Path parameters extracted from route (e.g., {petId} -> "123")
    #[serde(default)]
    pub path_parameters: HashMap<String, String>,
}

impl Request {
    /// Parse the body as JSON into a typed struct.
    ///
    /// # Example
    /// ```ignore
    /// #[derive(Deserialize)]
    /// struct CreatePet { name: String }
    ///
    /// let pet: CreatePet = req.json()?;
    /// ```
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> Result<T, HandlerError> {
        serde_json::from_str(self.body.as_deref().unwrap_or("null"))
            .map_err(|e| HandlerError::BadRequest(format!("Invalid JSON: {}", e)))
    }

    /// Get a query parameter as a string reference.
    pub fn query_param(&self, key: &str) -> Option<&String> {
        self.query.get(key)
    }

    /// Get a path parameter as a string reference.
    ///
    /// # Example
    /// ```ignore
    /// // Route: /pets/{petId}, Request: /pets/123
    /// let id = req.path_param("petId"); // Some(&"123".to_string())
    /// ```
    pub fn path_param(&self, key: &str) -> Option<&String> {
        self.path_parameters.get(key)
    }

    /// Get a header value (case-insensitive lookup).
    pub fn header(&self, key: &str) -> Option<&String> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }
}

/// Runtime information about the current invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    /// Name of the deployed function
    #[serde(default)]
    pub function_name: String,

    /// Request ID for tracing
    #[serde(default)]
    pub request_id: String,

    /// Milliseconds left before the runtime stops the invocation
    #[serde(default)]
    pub remaining_time_ms: Option<u64>,
}
