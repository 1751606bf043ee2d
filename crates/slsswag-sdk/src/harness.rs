//! Conformance harness every scaffolded function is tested with
//!
//! The harness invokes a handler the weakest possible way (no request, no
//! context), then checks the status code and the `message` field of the
//! body. Out of the box it expects the stub contract: 501 and
//! `"not implemented!"`.
//!
//! A handler that fails, whether by returning an error or by panicking,
//! shows up as a failure in the [`HarnessReport`]; the harness never takes
//! the test run down with it.
//!
//! ```ignore
//! #[tokio::test]
//! async fn conforms_to_stub_contract() {
//!     HandlerTestHarness::default().run(handle).await.assert_passed();
//! }
//! ```

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::handler::Handler;
use crate::response::NOT_IMPLEMENTED_MESSAGE;
use crate::{HandlerError, Response};

/// A single way a handler missed the contract
#[derive(Error, Debug)]
pub enum ConformanceFailure {
    #[error("handler returned an error: {0}")]
    Invocation(#[source] HandlerError),

    #[error("handler panicked: {0}")]
    Panicked(String),

    #[error("response has no body")]
    MissingBody,

    #[error("response body is not valid JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("expected status code {expected}, got {actual}")]
    StatusMismatch { expected: u16, actual: u16 },

    #[error("expected message {expected:?}, got {actual:?}")]
    MessageMismatch {
        expected: String,
        actual: Option<String>,
    },
}

/// Outcome of one harness run
#[derive(Debug, Default)]
pub struct HarnessReport {
    /// The envelope the handler produced, if it produced one
    pub response: Option<Response>,

    /// Every check that did not hold
    pub failures: Vec<ConformanceFailure>,
}

impl HarnessReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Panic with every collected failure unless the run passed.
    ///
    /// Meant for the last line of a `#[test]`.
    pub fn assert_passed(&self) {
        assert!(self.passed(), "handler failed conformance:\n{}", self);
    }
}

impl fmt::Display for HarnessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "passed");
        }
        for failure in &self.failures {
            writeln!(f, "  - {}", failure)?;
        }
        Ok(())
    }
}

/// Invokes a handler and checks the envelope it returns
#[derive(Debug, Clone)]
pub struct HandlerTestHarness {
    expected_status: u16,
    expected_message: String,
}

impl HandlerTestHarness {
    pub fn new(expected_status: u16, expected_message: impl Into<String>) -> Self {
        Self {
            expected_status,
            expected_message: expected_message.into(),
        }
    }

    /// Expect a different status code (builder pattern).
    pub fn expect_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Expect a different `message` (builder pattern).
    pub fn expect_message(mut self, message: impl Into<String>) -> Self {
        self.expected_message = message.into();
        self
    }

    /// Invoke `handler` with no arguments and check what comes back.
    ///
    /// Must be called from within a tokio runtime; the invocation runs on a
    /// spawned task so a panicking handler is contained.
    pub async fn run<H: Handler>(&self, handler: H) -> HarnessReport {
        let invocation = tokio::spawn(async move { handler.call(None, None).await });

        let response = match invocation.await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => return self.report(None, vec![ConformanceFailure::Invocation(err)]),
            Err(join_err) => {
                let message = if join_err.is_panic() {
                    panic_message(join_err.into_panic())
                } else {
                    join_err.to_string()
                };
                return self.report(None, vec![ConformanceFailure::Panicked(message)]);
            }
        };

        let failures = self.check(&response);
        self.report(Some(response), failures)
    }

    fn check(&self, response: &Response) -> Vec<ConformanceFailure> {
        let mut failures = Vec::new();

        if response.status_code != self.expected_status {
            failures.push(ConformanceFailure::StatusMismatch {
                expected: self.expected_status,
                actual: response.status_code,
            });
        }

        match response.json_body() {
            Ok(Some(body)) => {
                let actual = body.get("message").and_then(Value::as_str);
                if actual != Some(self.expected_message.as_str()) {
                    failures.push(ConformanceFailure::MessageMismatch {
                        expected: self.expected_message.clone(),
                        actual: actual.map(str::to_owned),
                    });
                }
            }
            Ok(None) => failures.push(ConformanceFailure::MissingBody),
            Err(err) => failures.push(ConformanceFailure::InvalidBody(err)),
        }

        failures
    }

    fn report(&self, response: Option<Response>, failures: Vec<ConformanceFailure>) -> HarnessReport {
        for failure in &failures {
            tracing::warn!(%failure, "Handler failed conformance check");
        }
        HarnessReport { response, failures }
    }
}

impl Default for HandlerTestHarness {
    fn default() -> Self {
        Self::new(501, NOT_IMPLEMENTED_MESSAGE)
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{HandlerResult, StubHandler};
    use crate::{Context, Request};
    use serde_json::json;

    #[tokio::test]
    async fn test_stub_handler_passes() {
        let report = HandlerTestHarness::default().run(StubHandler).await;

        report.assert_passed();
        assert_eq!(report.response, Some(Response::not_implemented()));
    }

    #[tokio::test]
    async fn test_failing_handler_is_reported() {
        let report = HandlerTestHarness::default()
            .run(|_req: Option<Request>, _ctx: Option<Context>| async {
                Err::<Response, _>(HandlerError::Internal("database down".to_string()))
            })
            .await;

        assert!(!report.passed());
        assert!(report.response.is_none());
        assert!(matches!(
            report.failures.as_slice(),
            [ConformanceFailure::Invocation(HandlerError::Internal(_))]
        ));
    }

    #[tokio::test]
    async fn test_panicking_handler_is_reported() {
        async fn explode(_req: Option<Request>, _ctx: Option<Context>) -> HandlerResult {
            panic!("boom");
        }

        let report = HandlerTestHarness::default().run(explode).await;

        match report.failures.as_slice() {
            [ConformanceFailure::Panicked(message)] => assert_eq!(message, "boom"),
            other => panic!("unexpected failures: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_wrong_status_and_message() {
        let report = HandlerTestHarness::default()
            .run(|_req: Option<Request>, _ctx: Option<Context>| async {
                Ok::<_, HandlerError>(Response::ok(json!({ "message": "hello" })))
            })
            .await;

        assert_eq!(report.failures.len(), 2);
        assert!(matches!(
            report.failures[0],
            ConformanceFailure::StatusMismatch { expected: 501, actual: 200 }
        ));
        assert!(matches!(
            &report.failures[1],
            ConformanceFailure::MessageMismatch { actual: Some(actual), .. } if actual == "hello"
        ));
    }

    #[tokio::test]
    async fn test_missing_and_invalid_bodies() {
        let report = HandlerTestHarness::default()
            .run(|_req: Option<Request>, _ctx: Option<Context>| async { Ok::<_, HandlerError>(Response::new(501)) })
            .await;
        assert!(matches!(report.failures.as_slice(), [ConformanceFailure::MissingBody]));

        let report = HandlerTestHarness::default()
            .run(|_req: Option<Request>, _ctx: Option<Context>| async {
                Ok::<_, HandlerError>(Response::new(501).with_body("not json"))
            })
            .await;
        assert!(matches!(report.failures.as_slice(), [ConformanceFailure::InvalidBody(_)]));
    }

    #[tokio::test]
    async fn test_custom_expectations() {
        let report = HandlerTestHarness::default()
            .expect_status(200)
            .expect_message("hello")
            .run(|_req: Option<Request>, _ctx: Option<Context>| async {
                Ok::<_, HandlerError>(Response::ok(json!({ "message": "hello" })))
            })
            .await;

        assert!(report.passed());
        assert_eq!(report.to_string(), "passed");
    }

    #[test]
    #[should_panic(expected = "handler failed conformance")]
    fn test_assert_passed_panics_on_failure() {
        let report = HarnessReport {
            response: None,
            failures: vec![ConformanceFailure::MissingBody],
        };
        report.assert_passed();
    }
}
