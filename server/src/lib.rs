//! In-memory todo list served over HTTP.
//!
//! # Overview
//! `TodoStore` holds the todos and the id counter, `TodoService` implements
//! create/list/get/update/delete/clear on top of it, and the axum router in
//! this module maps `/todos` routes onto the service.
//!
//! # Design
//! - No global state: every [`app`] call builds its own store, so tests get
//!   isolated instances.
//! - The service sits behind a `tokio::sync::RwLock`; mutations hold the
//!   write guard for the whole lookup-then-mutate step.
//! - Request bodies are validated before the service sees them (see [`dto`]).
//! - Not-found is a `TodoError` value, rendered as a 404 by [`error::ApiError`].

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod service;
pub mod shutdown;
pub mod store;

use std::sync::Arc;

use axum::{http::Method, routing::get, Router};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub use config::{ConfigError, ServerConfig};
pub use dto::{Confirmation, NewTodo, Todo, TodoId, TodoPatch};
pub use error::{ApiError, TodoError};
pub use service::TodoService;
pub use store::TodoStore;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RwLock<TodoService>>,
}

impl AppState {
    pub fn new(service: TodoService) -> Self {
        Self {
            service: Arc::new(RwLock::new(service)),
        }
    }
}

impl Default for AppState {
    /// State over a fresh, empty store.
    fn default() -> Self {
        Self::new(TodoService::new(TodoStore::new()))
    }
}

/// Router with a fresh, empty store and default configuration.
pub fn app() -> Router {
    app_with(&ServerConfig::default(), AppState::default())
}

pub fn app_with(config: &ServerConfig, state: AppState) -> Router {
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos)
                .post(handlers::create_todo)
                .delete(handlers::clear_todos),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .patch(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .method_not_allowed_fallback(handlers::route_not_found)
        .fallback(handlers::route_not_found)
        .with_state(state)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([config.cors_origin.clone()]))
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serves until `shutdown` resolves, then drains in-flight requests.
pub async fn run_with_shutdown<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
