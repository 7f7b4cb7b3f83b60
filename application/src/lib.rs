//! # Todo List Application Layer
//!
//! Use cases for the todo list service: commands that mutate aggregates,
//! queries that read them, command validation, and the event subscribers that
//! react to drained domain events.
//!
//! The layer depends only on the domain. Persistence is abstracted behind the
//! [`TodoListRepository`] port; the infrastructure crate provides the SQLite
//! implementation and the dispatcher that feeds [`EventSubscriber`]s.

pub mod commands;
pub mod error;
pub mod events;
pub mod queries;
pub mod repository;
pub mod testing;
pub mod validate;

pub use commands::{
    CompleteTodoItem, CompleteTodoItemHandler, CreateTodoList, CreateTodoListHandler, NewTodoItem,
};
pub use error::ApplicationError;
pub use events::{
    EventSubscriber, SubscriberError, TodoItemCompletedSubscriber, TodoListCompletedSubscriber,
};
pub use queries::{GetTodoListHandler, GetTodoListsHandler};
pub use repository::{RepositoryError, TodoListRepository};
pub use validate::Validate;
