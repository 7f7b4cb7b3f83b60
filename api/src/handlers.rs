//! HTTP handlers.
//!
//! Thin adapters: extract, delegate to the application handler, map the
//! aggregate to its response contract. Error mapping lives in
//! [`ApiError`](crate::error::ApiError).

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use todolist_application::CompleteTodoItem;
use todolist_domain::{TodoItemId, TodoListId};
use uuid::Uuid;

use crate::contracts::{CreateTodoListRequest, TodoListResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /todo-lists`: creates a list, optionally seeded with items.
///
/// # Errors
///
/// 422 when a field fails validation.
pub async fn create_todo_list(
    State(state): State<AppState>,
    Json(request): Json<CreateTodoListRequest>,
) -> Result<(StatusCode, Json<TodoListResponse>), ApiError> {
    let list = state.create_todo_list.handle(request.into()).await?;
    Ok((StatusCode::CREATED, Json(TodoListResponse::from(&list))))
}

/// `GET /todo-lists`: returns every stored list.
///
/// # Errors
///
/// 500 on repository failure.
pub async fn list_todo_lists(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoListResponse>>, ApiError> {
    let lists = state.get_todo_lists.handle().await?;
    Ok(Json(lists.iter().map(TodoListResponse::from).collect()))
}

/// `GET /todo-lists/:id`: returns one list.
///
/// # Errors
///
/// 404 when the list does not exist, 422 for the nil identifier.
pub async fn get_todo_list(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TodoListResponse>, ApiError> {
    let id = list_id(id)?;
    let list = state.get_todo_list.handle(id).await?;
    Ok(Json(TodoListResponse::from(&list)))
}

/// `POST /todo-lists/:list_id/items/:item_id/complete`: marks an item
/// completed and returns the updated list.
///
/// # Errors
///
/// 404 when the list or item does not exist, 422 for a nil identifier.
pub async fn complete_todo_item(
    State(state): State<AppState>,
    Path((list_id_raw, item_id_raw)): Path<(Uuid, Uuid)>,
) -> Result<Json<TodoListResponse>, ApiError> {
    let command = CompleteTodoItem {
        list_id: list_id(list_id_raw)?,
        item_id: TodoItemId::from_uuid(item_id_raw)
            .map_err(|e| ApiError::validation(e.to_string()))?,
    };
    let list = state.complete_todo_item.handle(command).await?;
    Ok(Json(TodoListResponse::from(&list)))
}

fn list_id(id: Uuid) -> Result<TodoListId, ApiError> {
    TodoListId::from_uuid(id).map_err(|e| ApiError::validation(e.to_string()))
}

/// Health check body.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// `GET /health`: liveness probe, no dependency checks.
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
