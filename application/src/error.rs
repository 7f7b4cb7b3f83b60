//! Errors surfaced by command and query handlers.

use thiserror::Error;
use todolist_domain::{TodoItemId, TodoListId, ValidationError};

use crate::repository::RepositoryError;

/// Error returned by application handlers.
///
/// Validation and not-found conditions are expected outcomes the caller
/// branches on; repository errors are infrastructure failures passed through
/// unchanged.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A command field violated a domain constraint.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No todo list with the given identifier exists.
    #[error("todo list {id} not found")]
    ListNotFound {
        /// The missing list.
        id: TodoListId,
    },

    /// The targeted list has no item with the given identifier.
    #[error("todo item {id} not found")]
    ItemNotFound {
        /// The missing item.
        id: TodoItemId,
    },

    /// The store failed while loading or persisting an aggregate.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
