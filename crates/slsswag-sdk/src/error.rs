//! Error types for slsswag handlers

use thiserror::Error;

use crate::Response;

/// Errors that can occur in a handler
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not implemented")]
    NotImplemented,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::BadRequest(_) => 400,
            HandlerError::NotFound => 404,
            HandlerError::NotImplemented => 501,
            HandlerError::Serialization(_) | HandlerError::Internal(_) => 500,
        }
    }

    /// Convert to a Response
    pub fn into_response(self) -> Response {
        match self {
            HandlerError::NotImplemented => Response::not_implemented(),
            other => Response::error(other.status_code(), other.to_string()),
        }
    }
}

impl From<HandlerError> for Response {
    fn from(err: HandlerError) -> Self {
        err.into_response()
    }
}
