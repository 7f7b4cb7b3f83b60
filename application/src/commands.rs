//! Commands that mutate todo lists, and their handlers.
//!
//! Each handler owns the repository port, validates its command, drives the
//! aggregate through its domain API and persists the result. Handlers hold no
//! per-request state and are shared behind `Arc` by the transport layer.

use std::sync::Arc;

use todolist_domain::{Entity, TodoItem, TodoItemId, TodoList, TodoListId};

use crate::error::ApplicationError;
use crate::repository::TodoListRepository;
use crate::validate::Validate;

/// Request to create a todo list, optionally seeded with items.
#[derive(Debug, Clone)]
pub struct CreateTodoList {
    /// Name of the list, 1 to 100 characters.
    pub name: String,
    /// Description of the list, 1 to 100 characters.
    pub description: String,
    /// Items to create the list with. May be empty.
    pub items: Vec<NewTodoItem>,
}

/// An item carried by [`CreateTodoList`].
#[derive(Debug, Clone)]
pub struct NewTodoItem {
    /// Name of the item, 1 to 100 characters.
    pub name: String,
    /// Description of the item, 1 to 100 characters.
    pub description: String,
}

/// Handles [`CreateTodoList`].
pub struct CreateTodoListHandler {
    repository: Arc<dyn TodoListRepository>,
}

impl CreateTodoListHandler {
    /// Creates the handler on top of a repository.
    #[must_use]
    pub fn new(repository: Arc<dyn TodoListRepository>) -> Self {
        Self { repository }
    }

    /// Validates the command, builds the aggregate and persists it.
    ///
    /// Returns the stored aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Validation`] for an invalid field and
    /// passes repository failures through.
    pub async fn handle(&self, command: CreateTodoList) -> Result<TodoList, ApplicationError> {
        command.validate()?;

        let items = command
            .items
            .into_iter()
            .map(|item| TodoItem::create(item.name, item.description, None))
            .collect::<Result<Vec<_>, _>>()?;

        let mut list = TodoList::create(command.name, command.description, None, Some(items))?;
        self.repository.add(&mut list).await?;

        tracing::info!(list_id = %list.id(), items = list.items().len(), "todo list created");
        Ok(list)
    }
}

/// Request to mark one item of a list as completed.
#[derive(Debug, Clone, Copy)]
pub struct CompleteTodoItem {
    /// The list owning the item.
    pub list_id: TodoListId,
    /// The item to complete.
    pub item_id: TodoItemId,
}

/// Handles [`CompleteTodoItem`].
pub struct CompleteTodoItemHandler {
    repository: Arc<dyn TodoListRepository>,
}

impl CompleteTodoItemHandler {
    /// Creates the handler on top of a repository.
    #[must_use]
    pub fn new(repository: Arc<dyn TodoListRepository>) -> Self {
        Self { repository }
    }

    /// Loads the list, completes the item and saves the list.
    ///
    /// Returns the updated aggregate. Completion is idempotent: repeating the
    /// command for an already-completed item succeeds without further state
    /// change or events.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::ListNotFound`] when the list does not
    /// exist, [`ApplicationError::ItemNotFound`] when the list has no such
    /// item (nothing is saved in that case), and passes repository failures
    /// through.
    pub async fn handle(&self, command: CompleteTodoItem) -> Result<TodoList, ApplicationError> {
        let mut list = self
            .repository
            .find(command.list_id)
            .await?
            .ok_or(ApplicationError::ListNotFound {
                id: command.list_id,
            })?;

        if !list.mark_item_as_completed(command.item_id) {
            return Err(ApplicationError::ItemNotFound {
                id: command.item_id,
            });
        }

        self.repository.save(&mut list).await?;

        tracing::debug!(
            list_id = %list.id(),
            item_id = %command.item_id,
            list_completed = list.completed(),
            "todo item completed"
        );
        Ok(list)
    }
}
