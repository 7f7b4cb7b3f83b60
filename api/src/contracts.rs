//! Request and response contracts.
//!
//! The wire shapes are separate from the domain types: requests are plain
//! serde structs turned into application commands, responses are snapshots of
//! the aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todolist_application::{CreateTodoList, NewTodoItem};
use todolist_domain::{Entity, TodoItem, TodoList};
use uuid::Uuid;

/// Request to create a todo list.
#[derive(Debug, Deserialize)]
pub struct CreateTodoListRequest {
    /// Name of the list, 1 to 100 characters.
    pub name: String,
    /// Description of the list, 1 to 100 characters.
    pub description: String,
    /// Items to seed the list with. Defaults to empty.
    #[serde(default)]
    pub items: Vec<NewTodoItemRequest>,
}

/// An item carried by [`CreateTodoListRequest`].
#[derive(Debug, Deserialize)]
pub struct NewTodoItemRequest {
    /// Name of the item, 1 to 100 characters.
    pub name: String,
    /// Description of the item, 1 to 100 characters.
    pub description: String,
}

impl From<CreateTodoListRequest> for CreateTodoList {
    fn from(request: CreateTodoListRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            items: request
                .items
                .into_iter()
                .map(|item| NewTodoItem {
                    name: item.name,
                    description: item.description,
                })
                .collect(),
        }
    }
}

/// A todo list as returned to clients.
#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    /// Identifier of the list.
    pub id: Uuid,
    /// Name of the list.
    pub name: String,
    /// Description of the list.
    pub description: String,
    /// When the list was created.
    pub date_created: DateTime<Utc>,
    /// When the list became completed, if it has.
    pub date_completed: Option<DateTime<Utc>>,
    /// Whether every item was completed at some point.
    pub completed: bool,
    /// The list's items, in insertion order.
    pub items: Vec<TodoItemResponse>,
}

/// A todo item as returned to clients.
#[derive(Debug, Serialize)]
pub struct TodoItemResponse {
    /// Identifier of the item.
    pub id: Uuid,
    /// Name of the item.
    pub name: String,
    /// Description of the item.
    pub description: String,
    /// When the item was created.
    pub date_created: DateTime<Utc>,
    /// When the item was completed, if it has been.
    pub date_completed: Option<DateTime<Utc>>,
    /// Whether the item is completed.
    pub completed: bool,
}

impl From<&TodoList> for TodoListResponse {
    fn from(list: &TodoList) -> Self {
        Self {
            id: *list.id().as_uuid(),
            name: list.name().to_string(),
            description: list.description().to_string(),
            date_created: list.date_created(),
            date_completed: list.date_completed(),
            completed: list.completed(),
            items: list.items().iter().map(TodoItemResponse::from).collect(),
        }
    }
}

impl From<&TodoItem> for TodoItemResponse {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: *item.id().as_uuid(),
            name: item.name().to_string(),
            description: item.description().to_string(),
            date_created: item.date_created(),
            date_completed: item.date_completed(),
            completed: item.completed(),
        }
    }
}
