//! The todo list aggregate root.

use chrono::{DateTime, Utc};

use crate::entity::{DomainEvents, Entity, PendingEvents, same_identity};
use crate::error::{ValidationError, validate_field};
use crate::event::{DomainEvent, DomainEventPayload};
use crate::ids::{TodoItemId, TodoListId};
use crate::todo_item::TodoItem;

/// A list of todo items.
///
/// The list is the aggregate root: it exclusively owns its items, exposes
/// them read-only, and is the only way to mutate them. Completing the last
/// incomplete item rolls the list itself over to completed and records a
/// [`DomainEventPayload::TodoListCompleted`] event, at most once in the
/// aggregate's lifetime.
///
/// Instances are not internally synchronized. Every mutation takes
/// `&mut self`; the intended use is one freshly loaded instance per request,
/// discarded afterwards.
#[derive(Debug, Clone)]
pub struct TodoList {
    id: TodoListId,
    name: String,
    description: String,
    date_created: DateTime<Utc>,
    date_completed: Option<DateTime<Utc>>,
    completed: bool,
    items: Vec<TodoItem>,
    events: PendingEvents,
}

impl TodoList {
    /// Creates a new list, optionally seeded with pre-built items.
    ///
    /// A random identifier is assigned when `id` is `None`; `items` defaults
    /// to empty. A new list is never completed, items or not: completion can
    /// only be reached through [`Self::mark_item_as_completed`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field when `name`
    /// or `description` is empty or longer than
    /// [`MAX_FIELD_LENGTH`](crate::error::MAX_FIELD_LENGTH) characters.
    pub fn create(
        name: String,
        description: String,
        id: Option<TodoListId>,
        items: Option<Vec<TodoItem>>,
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
            items: items.unwrap_or_default(),
            events: PendingEvents::new(),
        })
    }

    /// Restores a list from storage, with timestamps and completion state
    /// taken verbatim and an empty event buffer.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a stored field no longer satisfies
    /// the name/description constraints.
    pub fn rehydrate(
        id: TodoListId,
        name: String,
        description: String,
        date_created: DateTime<Utc>,
        date_completed: Option<DateTime<Utc>>,
        completed: bool,
        items: Vec<TodoItem>,
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
            items,
            events: PendingEvents::new(),
        })
    }

    /// The list's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The list's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the list was created.
    #[must_use]
    pub const fn date_created(&self) -> DateTime<Utc> {
        self.date_created
    }

    /// When the list became completed, if it has.
    #[must_use]
    pub const fn date_completed(&self) -> Option<DateTime<Utc>> {
        self.date_completed
    }

    /// Whether every item was completed at some point, flipping the list.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// The list's items, in insertion order. Read-only: items are mutated
    /// only through aggregate methods.
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Renames the list.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an empty or over-long name; the list
    /// is unchanged in that case.
    pub fn set_name(&mut self, name: String) -> Result<(), ValidationError> {
        validate_field("name", &name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the list's description.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an empty or over-long description;
    /// the list is unchanged in that case.
    pub fn set_description(&mut self, description: String) -> Result<(), ValidationError> {
        validate_field("description", &description)?;
        self.description = description;
        Ok(())
    }

    /// Marks the item with `item_id` completed and rolls up list completion.
    ///
    /// Returns `false`, mutating nothing, when no item carries `item_id`.
    /// Otherwise the item is completed (idempotently) and, unless the list is
    /// already completed, the rollup runs: once every item is completed the
    /// list flips to completed, stamps `date_completed` and records a single
    /// [`DomainEventPayload::TodoListCompleted`] event. The `completed` guard
    /// makes that event at-most-once for the aggregate's lifetime.
    ///
    /// Returns `true` whenever the item was found, whether or not the rollup
    /// fired.
    pub fn mark_item_as_completed(&mut self, item_id: TodoItemId) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == item_id) else {
            return false;
        };

        item.mark_completed();
        self.roll_up_completion();
        true
    }

    /// Flips the list to completed once all items are, recording the
    /// list-completed event. No-op when the list already completed.
    fn roll_up_completion(&mut self) {
        if self.completed {
            return;
        }
        if self.items.iter().all(TodoItem::completed) {
            self.completed = true;
            self.date_completed = Some(Utc::now());
            self.events.record(DomainEvent::new(
                DomainEventPayload::TodoListCompleted { list_id: self.id },
            ));
        }
    }
}

impl Entity for TodoList {
    type Id = TodoListId;

    fn id(&self) -> TodoListId {
        self.id
    }
}

impl DomainEvents for TodoList {
    fn domain_events(&self) -> &[DomainEvent] {
        self.events.as_slice()
    }

    fn take_domain_events(&mut self) -> Vec<DomainEvent> {
        self.events.take()
    }
}

impl PartialEq for TodoList {
    fn eq(&self, other: &Self) -> bool {
        same_identity(self, other)
    }
}

impl Eq for TodoList {}

impl std::hash::Hash for TodoList {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Panics: tests construct known-valid aggregates

    use super::*;
    use crate::error::MAX_FIELD_LENGTH;
    use chrono::Duration;

    fn item(name: &str) -> TodoItem {
        TodoItem::create(name.to_string(), format!("{name} details"), None).unwrap()
    }

    fn list_with_items(items: Vec<TodoItem>) -> TodoList {
        TodoList::create(
            "Groceries".to_string(),
            "Weekly shop".to_string(),
            None,
            Some(items),
        )
        .unwrap()
    }

    #[test]
    fn create_keeps_fields_exactly() {
        let list = list_with_items(vec![item("milk")]);

        assert_eq!(list.name(), "Groceries");
        assert_eq!(list.description(), "Weekly shop");
        assert!(!list.completed());
        assert_eq!(list.date_completed(), None);
        assert_eq!(list.items().len(), 1);
        assert!(list.domain_events().is_empty());
    }

    #[test]
    fn create_rejects_invalid_fields() {
        let err = TodoList::create(String::new(), "desc".to_string(), None, None);
        assert_eq!(err, Err(ValidationError::Empty { field: "name" }));

        let description = "d".repeat(MAX_FIELD_LENGTH + 1);
        let err = TodoList::create("name".to_string(), description, None, None);
        assert_eq!(
            err,
            Err(ValidationError::TooLong {
                field: "description",
                max: MAX_FIELD_LENGTH
            })
        );
    }

    #[test]
    fn empty_list_is_not_completed_at_creation() {
        let list = TodoList::create("Empty".to_string(), "No items".to_string(), None, None)
            .unwrap();

        assert!(!list.completed());
        assert_eq!(list.date_completed(), None);
        assert!(list.domain_events().is_empty());
    }

    #[test]
    fn unknown_item_returns_false_and_mutates_nothing() {
        let mut list = list_with_items(vec![item("milk")]);

        assert!(!list.mark_item_as_completed(TodoItemId::new()));
        assert!(!list.completed());
        assert!(!list.items()[0].completed());
        assert!(list.domain_events().is_empty());
    }

    #[test]
    fn completing_the_last_item_completes_the_list() {
        let only = item("milk");
        let only_id = only.id();
        let mut list = list_with_items(vec![only]);

        let before = Utc::now();
        assert!(list.mark_item_as_completed(only_id));

        assert!(list.completed());
        let completed_at = list.date_completed().unwrap();
        assert!(completed_at >= before);
        assert!(completed_at <= before + Duration::seconds(1));

        let events = list.domain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].payload(),
            &DomainEventPayload::TodoListCompleted { list_id: list.id() }
        );
    }

    #[test]
    fn completing_one_of_two_items_leaves_the_list_open() {
        let first = item("milk");
        let first_id = first.id();
        let mut list = list_with_items(vec![first, item("bread")]);

        assert!(list.mark_item_as_completed(first_id));

        assert!(!list.completed());
        assert_eq!(list.date_completed(), None);
        assert!(list.domain_events().is_empty());
        assert!(list.items()[0].completed());
        assert!(!list.items()[1].completed());
    }

    #[test]
    fn second_completion_of_the_same_item_is_idempotent() {
        let only = item("milk");
        let only_id = only.id();
        let mut list = list_with_items(vec![only]);

        assert!(list.mark_item_as_completed(only_id));
        let list_completed_at = list.date_completed();
        let item_completed_at = list.items()[0].date_completed();

        assert!(list.mark_item_as_completed(only_id));

        assert_eq!(list.date_completed(), list_completed_at);
        assert_eq!(list.items()[0].date_completed(), item_completed_at);
        // Still exactly one list-completed event ever registered.
        assert_eq!(list.domain_events().len(), 1);
    }

    #[test]
    fn completed_list_registers_no_further_events() {
        let first = item("milk");
        let second = item("bread");
        let first_id = first.id();
        let second_id = second.id();
        let mut list = list_with_items(vec![first, second]);

        assert!(list.mark_item_as_completed(first_id));
        assert!(list.mark_item_as_completed(second_id));
        assert!(list.completed());
        assert_eq!(list.domain_events().len(), 1);

        // Draining and completing again must not produce a second event.
        let drained = list.take_domain_events();
        assert_eq!(drained.len(), 1);
        assert!(list.mark_item_as_completed(first_id));
        assert!(list.domain_events().is_empty());
    }

    #[test]
    fn equality_is_by_identity_not_fields() {
        let id = TodoListId::new();
        let a = TodoList::create("one".to_string(), "first".to_string(), Some(id), None)
            .unwrap();
        let b = TodoList::create("two".to_string(), "second".to_string(), Some(id), None)
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn rehydrated_completed_list_stays_completed() {
        let id = TodoListId::new();
        let done = TodoItem::rehydrate(
            TodoItemId::new(),
            "task".to_string(),
            "details".to_string(),
            Utc::now(),
            Some(Utc::now()),
            true,
        )
        .unwrap();
        let done_id = done.id();

        let mut list = TodoList::rehydrate(
            id,
            "Old list".to_string(),
            "Finished long ago".to_string(),
            Utc::now(),
            Some(Utc::now()),
            true,
            vec![done],
        )
        .unwrap();

        // Marking an already-completed item on a completed list changes
        // nothing and raises nothing.
        assert!(list.mark_item_as_completed(done_id));
        assert!(list.completed());
        assert!(list.domain_events().is_empty());
    }
}
