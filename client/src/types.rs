//! Wire types for the todo API, as seen from the client.
//!
//! # Design
//! These mirror the server's JSON but are defined independently so the
//! client does not depend on axum. Integration tests against the real server
//! catch schema drift.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned todo id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub is_checked: bool,
}

/// Request payload for creating a todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

/// Request payload for `PATCH /todos/:id`. Both fields are required; the
/// server replaces the todo's text and checked flag wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub text: String,
    pub is_checked: bool,
}

/// `{ message, details }` body returned by create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Confirmation<T> {
    pub message: String,
    pub details: T,
}

/// Error body returned by the server for any 4xx/5xx.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: ErrorMessage,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    pub(crate) fn into_vec(self) -> Vec<String> {
        match self {
            ErrorMessage::One(message) => vec![message],
            ErrorMessage::Many(messages) => messages,
        }
    }
}
