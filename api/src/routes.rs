//! Router configuration.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    complete_todo_item, create_todo_list, get_todo_list, health_check, list_todo_lists,
};
use crate::state::AppState;

/// Builds the service router: the todo list endpoints, a health probe and
/// request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/todo-lists", post(create_todo_list).get(list_todo_lists))
        .route("/todo-lists/:id", get(get_todo_list))
        .route(
            "/todo-lists/:list_id/items/:item_id/complete",
            post(complete_todo_item),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
