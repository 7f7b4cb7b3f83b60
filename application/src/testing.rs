//! Test doubles for the application ports.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use todolist_domain::{DomainEvent, DomainEvents, Entity, TodoList, TodoListId};

use crate::events::{EventSubscriber, SubscriberError};
use crate::repository::{RepositoryError, TodoListRepository};

/// [`EventSubscriber`] that remembers every event it was handed, in order.
#[derive(Debug, Default)]
pub struct RecordingSubscriber {
    seen: Mutex<Vec<DomainEvent>>,
}

impl RecordingSubscriber {
    /// Events handled so far, in delivery order.
    #[must_use]
    pub fn seen(&self) -> Vec<DomainEvent> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl EventSubscriber for RecordingSubscriber {
    async fn handle(&self, event: &DomainEvent) -> Result<(), SubscriberError> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
        Ok(())
    }
}

/// [`EventSubscriber`] that fails every event, for dispatch failure paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSubscriber;

#[async_trait]
impl EventSubscriber for FailingSubscriber {
    async fn handle(&self, _event: &DomainEvent) -> Result<(), SubscriberError> {
        Err(SubscriberError::new("subscriber refused the event"))
    }
}

/// In-memory [`TodoListRepository`] for unit tests.
///
/// Carries no event dispatcher, so pending events stay on the aggregate
/// passed to `add`/`save` and tests can assert on them. Stored copies behave
/// like freshly loaded rows: they come back with empty event buffers.
#[derive(Debug, Default)]
pub struct InMemoryLists {
    lists: Mutex<Vec<TodoList>>,
}

impl InMemoryLists {
    /// Snapshot of the aggregate as a fresh load would return it.
    fn as_stored(list: &TodoList) -> TodoList {
        let mut copy = list.clone();
        let _ = copy.take_domain_events();
        copy
    }
}

#[async_trait]
impl TodoListRepository for InMemoryLists {
    async fn add(&self, list: &mut TodoList) -> Result<(), RepositoryError> {
        self.lists
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Self::as_stored(list));
        Ok(())
    }

    async fn find(&self, id: TodoListId) -> Result<Option<TodoList>, RepositoryError> {
        Ok(self
            .lists
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|list| list.id() == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<TodoList>, RepositoryError> {
        Ok(self
            .lists
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn save(&self, list: &mut TodoList) -> Result<(), RepositoryError> {
        let mut lists = self.lists.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(stored) = lists.iter_mut().find(|stored| stored.id() == list.id()) else {
            return Err(RepositoryError::NotFound { id: list.id() });
        };
        *stored = Self::as_stored(list);
        Ok(())
    }
}
