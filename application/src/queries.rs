//! Read-side handlers for todo lists.

use std::sync::Arc;

use todolist_domain::{TodoList, TodoListId};

use crate::error::ApplicationError;
use crate::repository::TodoListRepository;

/// Returns every stored todo list.
pub struct GetTodoListsHandler {
    repository: Arc<dyn TodoListRepository>,
}

impl GetTodoListsHandler {
    /// Creates the handler on top of a repository.
    #[must_use]
    pub fn new(repository: Arc<dyn TodoListRepository>) -> Self {
        Self { repository }
    }

    /// Loads all lists.
    ///
    /// # Errors
    ///
    /// Passes repository failures through.
    pub async fn handle(&self) -> Result<Vec<TodoList>, ApplicationError> {
        Ok(self.repository.list().await?)
    }
}

/// Returns a single todo list by identifier.
pub struct GetTodoListHandler {
    repository: Arc<dyn TodoListRepository>,
}

impl GetTodoListHandler {
    /// Creates the handler on top of a repository.
    #[must_use]
    pub fn new(repository: Arc<dyn TodoListRepository>) -> Self {
        Self { repository }
    }

    /// Loads the list with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::ListNotFound`] when no such list exists
    /// and passes repository failures through.
    pub async fn handle(&self, id: TodoListId) -> Result<TodoList, ApplicationError> {
        self.repository
            .find(id)
            .await?
            .ok_or(ApplicationError::ListNotFound { id })
    }
}
