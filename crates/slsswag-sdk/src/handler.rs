//! The handler contract and the default stub handler
//!
//! Anything that takes an optional [`Request`] and an optional [`Context`]
//! and eventually yields a [`Response`] is a [`Handler`]. Plain async
//! functions qualify without any glue:
//!
//! ```ignore
//! use slsswag_sdk::prelude::*;
//!
//! pub async fn handle(req: Option<Request>, _ctx: Option<Context>) -> HandlerResult {
//!     let path = req.map(|r| r.path).unwrap_or_default();
//!     Ok(Response::ok(json!({"path": path})))
//! }
//! ```

use std::future::Future;
use std::pin::Pin;

use crate::{Context, HandlerError, Request, Response};

/// Type alias for boxed future returned by handlers
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// What a handler invocation resolves to
pub type HandlerResult = Result<Response, HandlerError>;

/// A function entry point.
///
/// Both arguments are optional: the weakest invocation passes neither. The
/// returned future owns everything it needs, so the caller can move it onto
/// another task.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, req: Option<Request>, ctx: Option<Context>) -> BoxFuture<'static, HandlerResult>;
}

impl<F, Fut> Handler for F
where
    F: Fn(Option<Request>, Option<Context>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    fn call(&self, req: Option<Request>, ctx: Option<Context>) -> BoxFuture<'static, HandlerResult> {
        Box::pin(self(req, ctx))
    }
}

/// Default body of a freshly scaffolded function.
///
/// Ignores its inputs and always answers 501 `{"message":"not implemented!"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubHandler;

impl Handler for StubHandler {
    fn call(&self, _req: Option<Request>, _ctx: Option<Context>) -> BoxFuture<'static, HandlerResult> {
        Box::pin(async { Ok(Response::not_implemented()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{default_headers, NOT_IMPLEMENTED_MESSAGE};

    #[tokio::test]
    async fn test_stub_with_no_arguments() {
        let response = StubHandler.call(None, None).await.unwrap();

        assert_eq!(response.status_code, 501);
        assert_eq!(response.headers, default_headers());
        assert_eq!(
            response.json_body().unwrap(),
            Some(serde_json::json!({ "message": NOT_IMPLEMENTED_MESSAGE }))
        );
    }

    #[tokio::test]
    async fn test_stub_ignores_inputs() {
        let req = Request {
            method: "POST".to_string(),
            body: Some("not even json".to_string()),
            ..Default::default()
        };
        let ctx = Context {
            function_name: "pets-get".to_string(),
            ..Default::default()
        };

        let response = StubHandler.call(Some(req), Some(ctx)).await.unwrap();
        assert_eq!(response, Response::not_implemented());
    }

    #[tokio::test]
    async fn test_async_fn_is_handler() {
        async fn echo_path(req: Option<Request>, _ctx: Option<Context>) -> HandlerResult {
            let path = req.map(|r| r.path).unwrap_or_default();
            Ok(Response::ok(serde_json::json!({ "request_path": path })))
        }

        let req = Request {
            path: "/pets".to_string(),
            ..Default::default()
        };
        let response = Handler::call(&echo_path, Some(req), None).await.unwrap();
        assert_eq!(response.body.as_deref(), Some("{\"requestPath\":\"/pets\"}"));
    }

    #[test]
    fn test_handler_error_conversion() {
        let err = HandlerError::BadRequest("test error".to_string());
        let response: Response = err.into();
        assert_eq!(response.status_code, 400);

        let response = HandlerError::NotImplemented.into_response();
        assert_eq!(response, Response::not_implemented());
    }
}
