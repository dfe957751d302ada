/// HTTP transport layer
///
/// Builds the axum router over a shared storage handle. The routes mirror
/// the JSON API the frontend consumes.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::storage::SqliteStorage;

/// Shared state available to every handler
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<SqliteStorage>,
}

/// Build the application router
pub fn router(storage: Arc<SqliteStorage>) -> Router {
    let state = AppState { storage };

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/api/habits",
            get(handlers::list_habits).post(handlers::create_habit),
        )
        .route(
            "/api/habits/{id}",
            put(handlers::update_habit).delete(handlers::delete_habit),
        )
        .route("/api/habits/{id}/complete", post(handlers::toggle_completion))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
