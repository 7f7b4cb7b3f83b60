//! Command validation.
//!
//! Commands are validated before any domain object is constructed, using the
//! same field guards the domain factories apply, so the error taxonomy stays
//! single-sourced. The domain re-checks on construction; this layer exists to
//! reject bad input at the application boundary.

use todolist_domain::{ValidationError, validate_field};

use crate::commands::CreateTodoList;

/// A command that can be checked before it is handled.
pub trait Validate {
    /// Checks every field of the command.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for CreateTodoList {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_field("name", &self.name)?;
        validate_field("description", &self.description)?;
        for item in &self.items {
            validate_field("name", &item.name)?;
            validate_field("description", &item.description)?;
        }
        Ok(())
    }
}
