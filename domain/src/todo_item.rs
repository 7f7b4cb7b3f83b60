//! The todo item entity.

use chrono::{DateTime, Utc};

use crate::entity::{DomainEvents, Entity, PendingEvents, same_identity};
use crate::error::{ValidationError, validate_field};
use crate::event::DomainEvent;
use crate::ids::TodoItemId;

/// A single entry in a todo list.
///
/// Items live inside a [`TodoList`](crate::todo_list::TodoList) aggregate and
/// are mutated only through it. Completion is monotonic: once an item is
/// completed it never reverts, and the first completion timestamp is kept.
#[derive(Debug, Clone)]
pub struct TodoItem {
    id: TodoItemId,
    name: String,
    description: String,
    date_created: DateTime<Utc>,
    date_completed: Option<DateTime<Utc>>,
    completed: bool,
    events: PendingEvents,
}

impl TodoItem {
    /// Creates a new, uncompleted item.
    ///
    /// A random identifier is assigned when `id` is `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field when `name`
    /// or `description` is empty or longer than
    /// [`MAX_FIELD_LENGTH`](crate::error::MAX_FIELD_LENGTH) characters.
    pub fn create(
        name: String,
        description: String,
        id: Option<TodoItemId>,
    ) -> Result<Self, ValidationError> {
        validate_field("name", &name)?;
        validate_field("description", &description)?;

        Ok(Self {
            id: id.unwrap_or_default(),
            name,
            description,
            date_created: Utc::now(),
            date_completed: None,
            completed: false,
            events: PendingEvents::new(),
        })
    }

    /// Restores an item from storage, with timestamps and completion state
    /// taken verbatim and an empty event buffer.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a stored field no longer satisfies
    /// the name/description constraints.
    pub fn rehydrate(
        id: TodoItemId,
        name: String,
        description: String,
        date_created: DateTime<Utc>,
        date_completed: Option<DateTime<Utc>>,
        completed: bool,
    ) -> Result<Self, ValidationError> {
        validate_field("name", &name)?;
        validate_field("description", &description)?;

        Ok(Self {
            id,
            name,
            description,
            date_created,
            date_completed,
            completed,
            events: PendingEvents::new(),
        })
    }

    /// The item's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the item was created.
    #[must_use]
    pub const fn date_created(&self) -> DateTime<Utc> {
        self.date_created
    }

    /// When the item was first completed, if it has been.
    #[must_use]
    pub const fn date_completed(&self) -> Option<DateTime<Utc>> {
        self.date_completed
    }

    /// Whether the item is completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Renames the item.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an empty or over-long name; the item
    /// is unchanged in that case.
    pub fn set_name(&mut self, name: String) -> Result<(), ValidationError> {
        validate_field("name", &name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the item's description.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an empty or over-long description;
    /// the item is unchanged in that case.
    pub fn set_description(&mut self, description: String) -> Result<(), ValidationError> {
        validate_field("description", &description)?;
        self.description = description;
        Ok(())
    }

    /// Marks the item completed, stamping the completion time.
    ///
    /// Idempotent: calling this on an already-completed item changes nothing
    /// and keeps the original completion timestamp. Item completion itself
    /// raises no event; the aggregate decides whether a list-level transition
    /// follows.
    pub fn mark_completed(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;
        self.date_completed = Some(Utc::now());
    }
}

impl Entity for TodoItem {
    type Id = TodoItemId;

    fn id(&self) -> TodoItemId {
        self.id
    }
}

impl DomainEvents for TodoItem {
    fn domain_events(&self) -> &[DomainEvent] {
        self.events.as_slice()
    }

    fn take_domain_events(&mut self) -> Vec<DomainEvent> {
        self.events.take()
    }
}

impl PartialEq for TodoItem {
    fn eq(&self, other: &Self) -> bool {
        same_identity(self, other)
    }
}

impl Eq for TodoItem {}

impl std::hash::Hash for TodoItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
