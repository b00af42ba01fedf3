//! Custom axum extractors.
//!
//! - [`Validated`]: JSON body decoded then checked through [`Validate`].
//! - [`TodoIdParam`]: `:id` path segment parsed as a numeric `TodoId`.
//!   Only an optional `-` followed by ASCII digits is numeric. A numeric id
//!   that no todo can have (negative, or past `u64::MAX`) is a 404.
//!
//! Both reject with `ApiError`, so malformed input produces the same error
//! body as every other failure.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};

use crate::dto::{TodoId, Validate};
use crate::error::ApiError;

const ID_NOT_NUMERIC: &str = "Validation failed (numeric string is expected)";

/// A request body that passed validation.
#[derive(Debug)]
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(input) = Json::<T::Input>::from_request(req, state).await?;
        T::validate(input).map(Validated).map_err(ApiError::validation)
    }
}

/// The `:id` segment of a todo route.
#[derive(Debug, Clone, Copy)]
pub struct TodoIdParam(pub TodoId);

impl<S> FromRequestParts<S> for TodoIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bad_request(ID_NOT_NUMERIC))?;
        parse_id(&raw).map(TodoIdParam)
    }
}

fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::bad_request(ID_NOT_NUMERIC));
    }
    raw.parse::<u64>()
        .map(TodoId)
        .map_err(|_| ApiError::not_found(format!("Todo with id {raw} not found")))
}
