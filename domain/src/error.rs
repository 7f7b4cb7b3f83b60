//! Validation errors raised by the domain layer.
//!
//! Every mutation entry point validates its inputs before touching any field,
//! so an `Err` here means no partial state change has happened. Errors are
//! always attributed to the field (or identifier kind) that failed.

use thiserror::Error;

/// Maximum number of characters allowed in a named text field.
pub const MAX_FIELD_LENGTH: usize = 100;

/// Error raised when a field or identifier violates a domain constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field was empty.
    #[error("{field} must not be empty")]
    Empty {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A text field exceeded the maximum allowed length.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Maximum allowed number of characters.
        max: usize,
    },

    /// An identifier was constructed from the all-zero sentinel value.
    #[error("{kind} must not be nil")]
    NilIdentifier {
        /// Identifier type that rejected the value.
        kind: &'static str,
    },
}

impl ValidationError {
    /// Returns the field or identifier name the error is attributed to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::TooLong { field, .. } => field,
            Self::NilIdentifier { kind } => kind,
        }
    }
}

/// Checks a text field against the shared non-empty and maximum-length rules.
///
/// Length is counted in characters, not bytes.
///
/// # Errors
///
/// Returns [`ValidationError::Empty`] for an empty value and
/// [`ValidationError::TooLong`] for one longer than [`MAX_FIELD_LENGTH`]
/// characters, attributed to `field` in both cases.
pub fn validate_field(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > MAX_FIELD_LENGTH {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_FIELD_LENGTH,
        });
    }
    Ok(())
}
