//! Domain errors and their HTTP rendering.
//!
//! # Design
//! `TodoError` is what the service returns; it knows nothing about HTTP.
//! `ApiError` is what handlers return; it carries a status and a message and
//! renders the `{ statusCode, message, error }` body through `IntoResponse`.
//! Validation failures keep their full list of messages, every other error
//! carries a single string.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::dto::TodoId;

/// Failures raised by `TodoService`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    #[error("Todo with id {0} not found")]
    NotFound(TodoId),
}

/// Single message or list of validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

/// Error returned from HTTP handlers and extractors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: ErrorMessage,
}

impl ApiError {
    pub fn new(status: StatusCode, message: ErrorMessage) -> Self {
        Self { status, message }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorMessage::One(message.into()))
    }

    /// 400 carrying every violated validation rule.
    pub fn validation(messages: Vec<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorMessage::Many(messages))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorMessage::One(message.into()))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &ErrorMessage {
        &self.message
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(_) => Self::not_found(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    status_code: u16,
    message: ErrorMessage,
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = ?self.message, "request failed");
        } else {
            tracing::debug!(status = %self.status, message = ?self.message, "request rejected");
        }

        let body = ErrorBody {
            status_code: self.status.as_u16(),
            message: self.message,
            error: self.status.canonical_reason().unwrap_or("Error"),
        };
        (self.status, Json(body)).into_response()
    }
}
