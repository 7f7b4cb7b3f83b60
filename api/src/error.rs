//! HTTP error responses.
//!
//! Bridges application-layer failures to HTTP, implementing axum's
//! [`IntoResponse`]. Validation failures surface as 422 with the offending
//! field named in the message; not-found conditions as 404; everything else
//! as 500 with the detail logged, not leaked to the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use todolist_application::ApplicationError;

/// Error type returned by HTTP handlers.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    status: StatusCode,
    /// User-facing message.
    message: String,
    /// Stable code for client error handling.
    code: &'static str,
}

impl ApiError {
    /// Creates an error with an explicit status, message and code.
    #[must_use]
    pub const fn new(status: StatusCode, message: String, code: &'static str) -> Self {
        Self {
            status,
            message,
            code,
        }
    }

    /// 404 Not Found for a resource/identifier pair.
    #[must_use]
    pub fn not_found(resource: impl fmt::Display, id: impl fmt::Display) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("{resource} with id {id} not found"),
            "NOT_FOUND",
        )
    }

    /// 422 Unprocessable Entity for a rejected field.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            message.into(),
            "VALIDATION_ERROR",
        )
    }

    /// 500 Internal Server Error with a generic client-facing message.
    #[must_use]
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An internal error occurred".to_string(),
            "INTERNAL_SERVER_ERROR",
        )
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(validation) => Self::validation(validation.to_string()),
            ApplicationError::ListNotFound { id } => Self::not_found("Todo list", id),
            ApplicationError::ItemNotFound { id } => Self::not_found("Todo item", id),
            ApplicationError::Repository(repository) => {
                tracing::error!(error = %repository, "repository failure");
                Self::internal()
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

/// Envelope around [`ErrorBody`].
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, code = self.code, message = %self.message, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}
