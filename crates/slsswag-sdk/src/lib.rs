//! slsswag SDK - the response contract shared by every scaffolded function
//!
//! Whatever language template a function was generated from, it has to hand
//! the gateway the same envelope: `{statusCode, headers, body}`, where `body`
//! is JSON text with lower camel case keys and no null fields. This crate is
//! the reference for that envelope, for the default "not implemented"
//! handler, and for the conformance harness generated projects are tested
//! with.

pub mod request;
pub mod response;
pub mod normalize;
pub mod handler;
pub mod harness;
pub mod error;

/// Version of this SDK, for projects generated against it
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    //! Common imports for slsswag handlers
    pub use crate::request::{Context, Request};
    pub use crate::response::{default_headers, Headers, Response};
    pub use crate::handler::{Handler, HandlerResult, StubHandler};
    pub use crate::error::HandlerError;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use request::{Context, Request};
pub use response::Response;
pub use handler::{Handler, StubHandler};
pub use harness::HandlerTestHarness;
pub use error::HandlerError;
