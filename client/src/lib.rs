//! Synchronous client core for the todo API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the HTTP round-trip, which keeps
//! this crate deterministic and free of an async runtime.
//!
//! # Design
//! - `TodoClient` holds only `base_url`.
//! - Every endpoint has a `build_*` / `parse_*` pair, so the I/O boundary is
//!   explicit.
//! - Server error bodies are decoded into `ApiError::NotFound`,
//!   `ApiError::Validation` or `ApiError::BadRequest` with the server's text.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Confirmation, CreateTodo, Todo, TodoId, UpdateTodo};
