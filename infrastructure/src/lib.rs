//! # Todo List Infrastructure
//!
//! The outer layer of the todo list service: the [`DomainEventDispatcher`]
//! that publishes drained domain events to subscribers, and the
//! [`SqliteTodoListRepository`] implementing the application's persistence
//! port over SQLite.
//!
//! The repository is the unit-of-work boundary. A successful `add` or `save`
//! commits the aggregate's rows first and only then, when a dispatcher is
//! configured, drains and publishes the aggregate's pending events. Without a
//! dispatcher persistence succeeds with no publish step.

pub mod events;
pub mod persistence;

pub use events::{DispatchError, DomainEventDispatcher};
pub use persistence::{SCHEMA, SqliteTodoListRepository, init_schema};
