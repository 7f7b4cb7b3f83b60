//! Strongly-typed identifiers for the todo list aggregate.
//!
//! Identifiers wrap a UUID and compare, hash and display by that value. The
//! nil (all-zero) UUID is rejected wherever an explicit value is supplied,
//! which keeps "unset" identifiers out of the domain entirely.

use serde::Serialize;
use uuid::Uuid;

use crate::error::ValidationError;

macro_rules! identifier {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an explicit UUID, as when rehydrating from storage.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::NilIdentifier`] if `id` is the nil
            /// UUID.
            pub fn from_uuid(id: Uuid) -> Result<Self, ValidationError> {
                if id.is_nil() {
                    return Err(ValidationError::NilIdentifier {
                        kind: stringify!($name),
                    });
                }
                Ok(Self(id))
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

identifier! {
    /// Unique identifier of a [`TodoList`](crate::todo_list::TodoList).
    TodoListId
}

identifier! {
    /// Unique identifier of a [`TodoItem`](crate::todo_item::TodoItem).
    TodoItemId
}
