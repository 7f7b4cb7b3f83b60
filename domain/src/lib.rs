//! # Todo List Domain
//!
//! The domain layer of the todo list service: the [`TodoList`] aggregate
//! root, its [`TodoItem`] children, strongly-typed identifiers and the
//! transient domain events recorded when a list completes.
//!
//! ## Design
//!
//! - **Composition over inheritance**: there is no entity base type. Each
//!   entity embeds a [`PendingEvents`] buffer by value and implements the
//!   [`Entity`] and [`DomainEvents`] traits; [`same_identity`] provides the
//!   shared equality-by-identifier predicate.
//! - **Exclusive ownership**: the aggregate owns its items outright and every
//!   mutation goes through `&mut self`. There is no interior mutability and
//!   no locking; callers hold one instance per request.
//! - **Transient events**: [`DomainEvent`]s queue on the entity that raised
//!   them and are drained exactly once after a successful commit. They are
//!   not an event log.
//!
//! The crate is pure and synchronous; persistence and dispatch live in the
//! outer layers.

pub mod entity;
pub mod error;
pub mod event;
pub mod ids;
pub mod todo_item;
pub mod todo_list;

pub use entity::{DomainEvents, Entity, PendingEvents, same_identity};
pub use error::{MAX_FIELD_LENGTH, ValidationError, validate_field};
pub use event::{DomainEvent, DomainEventKind, DomainEventPayload};
pub use ids::{TodoItemId, TodoListId};
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
