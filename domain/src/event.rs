//! Domain events raised by the todo list aggregate.
//!
//! Events are transient notifications: they are recorded on the entity that
//! raised them, drained exactly once by the dispatcher after a successful
//! commit, and then discarded. They are not persisted and cannot be replayed.

use chrono::{DateTime, Utc};

use crate::ids::{TodoItemId, TodoListId};

/// A domain event together with the moment it occurred.
///
/// The timestamp is captured when the event is constructed, which in practice
/// is the instant the state transition happened inside the aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainEvent {
    occurred_at: DateTime<Utc>,
    payload: DomainEventPayload,
}

/// What happened, as a tagged union over the known event variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainEventPayload {
    /// A todo item was marked completed.
    ///
    /// No aggregate code path records this variant today: item completion is
    /// only observable through the list-level rollup. The variant stays part
    /// of the model as the hook for item-level consumers.
    TodoItemCompleted {
        /// The completed item.
        item_id: TodoItemId,
    },

    /// Every item in a todo list became completed and the list transitioned
    /// to completed. Recorded at most once per aggregate lifetime.
    TodoListCompleted {
        /// The completed list.
        list_id: TodoListId,
    },
}

/// Discriminant of [`DomainEventPayload`], used to key subscriber
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainEventKind {
    /// A todo item was completed.
    TodoItemCompleted,
    /// A todo list was completed.
    TodoListCompleted,
}

impl DomainEventKind {
    /// Stable name of the event kind, for logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TodoItemCompleted => "TodoItemCompleted",
            Self::TodoListCompleted => "TodoListCompleted",
        }
    }
}

impl std::fmt::Display for DomainEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DomainEventPayload {
    /// Returns the discriminant of this payload.
    #[must_use]
    pub const fn kind(&self) -> DomainEventKind {
        match self {
            Self::TodoItemCompleted { .. } => DomainEventKind::TodoItemCompleted,
            Self::TodoListCompleted { .. } => DomainEventKind::TodoListCompleted,
        }
    }
}

impl DomainEvent {
    /// Wraps a payload, stamping it with the current time.
    #[must_use]
    pub fn new(payload: DomainEventPayload) -> Self {
        Self {
            occurred_at: Utc::now(),
            payload,
        }
    }

    /// When the event occurred.
    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// The event payload.
    #[must_use]
    pub const fn payload(&self) -> &DomainEventPayload {
        &self.payload
    }

    /// Discriminant of the payload, used for subscriber lookup.
    #[must_use]
    pub const fn kind(&self) -> DomainEventKind {
        self.payload.kind()
    }
}
