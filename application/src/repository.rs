//! The persistence port for todo list aggregates.

use async_trait::async_trait;
use thiserror::Error;
use todolist_domain::{TodoList, TodoListId};

/// Storage contract for [`TodoList`] aggregates.
///
/// `add` and `save` take the aggregate by exclusive reference because the
/// commit path drains its pending domain events: implementations that carry
/// a dispatcher invoke it exactly once per call, after the write is durable.
/// Implementations without a dispatcher persist successfully and leave the
/// buffer untouched.
#[async_trait]
pub trait TodoListRepository: Send + Sync {
    /// Persists a newly created aggregate.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] when the write or the post-commit event
    /// dispatch fails.
    async fn add(&self, list: &mut TodoList) -> Result<(), RepositoryError>;

    /// Loads the aggregate with the given identifier, or `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] when the read fails or a stored row can
    /// no longer be rehydrated.
    async fn find(&self, id: TodoListId) -> Result<Option<TodoList>, RepositoryError>;

    /// Loads every stored aggregate.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] when the read fails or a stored row can
    /// no longer be rehydrated.
    async fn list(&self) -> Result<Vec<TodoList>, RepositoryError>;

    /// Persists changes to a previously stored aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no row exists for the
    /// aggregate's identifier, and other variants when the write or the
    /// post-commit event dispatch fails.
    async fn save(&self, list: &mut TodoList) -> Result<(), RepositoryError>;
}

/// Error raised by a [`TodoListRepository`] implementation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// `save` targeted an identifier with no stored row.
    #[error("todo list {id} not found in storage")]
    NotFound {
        /// The missing list.
        id: TodoListId,
    },

    /// A stored row no longer satisfies the domain's constraints.
    #[error("stored row {id} failed rehydration: {reason}")]
    Corrupted {
        /// Raw identifier of the unreadable row.
        id: String,
        /// What went wrong while rebuilding the aggregate.
        reason: String,
    },

    /// The underlying store failed.
    #[error("storage failure: {reason}")]
    Storage {
        /// Driver-level failure detail.
        reason: String,
    },

    /// The write committed but publishing the drained events failed. Data is
    /// durable; side effects are unconfirmed. Never retried.
    #[error("event dispatch failed after commit: {reason}")]
    DispatchFailed {
        /// Subscriber failure detail.
        reason: String,
    },
}
