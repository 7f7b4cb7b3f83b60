//! SQLite persistence for todo list aggregates.

pub mod repository;
pub mod schema;

pub use repository::SqliteTodoListRepository;
pub use schema::{SCHEMA, init_schema};
