//! Event subscribers.
//!
//! Subscribers receive drained domain events from the dispatcher after a
//! commit. The two shipped here log the identifier carried by the event and
//! feed nothing back into the aggregate.

use async_trait::async_trait;
use thiserror::Error;
use todolist_domain::{DomainEvent, DomainEventPayload};

/// A callback registered with the dispatcher for one event kind.
///
/// Invoked sequentially during a flush; a returned error aborts the flush and
/// propagates to the committing caller.
#[async_trait]
pub trait EventSubscriber: Send + Sync {
    /// Handles one published event.
    ///
    /// # Errors
    ///
    /// Returns a [`SubscriberError`] when the subscriber cannot process the
    /// event; the dispatcher propagates it without retrying.
    async fn handle(&self, event: &DomainEvent) -> Result<(), SubscriberError>;
}

/// Failure raised by an [`EventSubscriber`].
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct SubscriberError {
    reason: String,
}

impl SubscriberError {
    /// Wraps a failure description.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Logs completed todo items.
///
/// Registered for the item-completed kind. No aggregate code path records
/// that event today, so this fires only for externally recorded events; it
/// stays wired as the item-level consumer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TodoItemCompletedSubscriber;

#[async_trait]
impl EventSubscriber for TodoItemCompletedSubscriber {
    async fn handle(&self, event: &DomainEvent) -> Result<(), SubscriberError> {
        if let DomainEventPayload::TodoItemCompleted { item_id } = event.payload() {
            tracing::info!(%item_id, occurred_at = %event.occurred_at(), "todo item completed");
        }
        Ok(())
    }
}

/// Logs completed todo lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct TodoListCompletedSubscriber;

#[async_trait]
impl EventSubscriber for TodoListCompletedSubscriber {
    async fn handle(&self, event: &DomainEvent) -> Result<(), SubscriberError> {
        if let DomainEventPayload::TodoListCompleted { list_id } = event.payload() {
            tracing::info!(%list_id, occurred_at = %event.occurred_at(), "todo list completed");
        }
        Ok(())
    }
}
