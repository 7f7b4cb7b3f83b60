//! # Todo List HTTP API
//!
//! The transport layer of the todo list service: an axum router exposing the
//! application's commands and queries, request/response contracts separate
//! from the domain types, and the error mapping from application failures to
//! HTTP responses.
//!
//! The router is built from an [`AppState`] carrying the shared handlers;
//! the binary crate wires it to a concrete repository.

pub mod contracts;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
