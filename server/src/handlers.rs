//! Route handlers for `/todos`.
//!
//! Each handler takes the lock it needs, makes one `TodoService` call and
//! turns the result into a response. Reads share the lock; writes hold it
//! exclusively for the whole lookup-then-mutate step.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    Json,
};
use tracing::instrument;

use crate::dto::{Confirmation, NewTodo, Todo, TodoPatch};
use crate::error::ApiError;
use crate::extract::{TodoIdParam, Validated};
use crate::AppState;

#[instrument(skip_all)]
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    let service = state.service.read().await;
    Json(service.list())
}

#[instrument(skip_all)]
pub async fn create_todo(
    State(state): State<AppState>,
    Validated(input): Validated<NewTodo>,
) -> (StatusCode, Json<Confirmation<Todo>>) {
    let created = state.service.write().await.create(input);
    (StatusCode::CREATED, Json(created))
}

#[instrument(skip(state))]
pub async fn get_todo(
    State(state): State<AppState>,
    TodoIdParam(id): TodoIdParam,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.service.read().await.get(id)?;
    Ok(Json(todo))
}

#[instrument(skip(state, patch))]
pub async fn update_todo(
    State(state): State<AppState>,
    TodoIdParam(id): TodoIdParam,
    Validated(patch): Validated<TodoPatch>,
) -> Result<Json<Confirmation<Todo>>, ApiError> {
    let updated = state.service.write().await.update(id, patch)?;
    Ok(Json(updated))
}

#[instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    TodoIdParam(id): TodoIdParam,
) -> Result<String, ApiError> {
    let message = state.service.write().await.delete(id)?;
    Ok(message)
}

#[instrument(skip_all)]
pub async fn clear_todos(State(state): State<AppState>) -> String {
    state.service.write().await.clear()
}

/// Answers unknown paths and unsupported methods on known paths.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::not_found(format!("Cannot {method} {}", uri.path()))
}
