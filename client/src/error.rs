//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `Validation` get dedicated variants because callers show
//! them to users differently from "the server returned something
//! unexpected". Both carry the server's own message text. Any other non-2xx
//! lands in `HttpError` with the raw status and body.

/// Errors returned by `TodoClient` methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 404: the todo does not exist. Holds the server's message.
    #[error("not found: {0}")]
    NotFound(String),

    /// 400 with a list of violated validation rules.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// 400 with a single message, such as a malformed id or body.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
