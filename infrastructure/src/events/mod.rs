//! Domain event dispatch.

pub mod dispatcher;

pub use dispatcher::{DispatchError, DomainEventDispatcher};
