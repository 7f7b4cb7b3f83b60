//! Property tests for the field validation shared by lists and items.

#![allow(clippy::unwrap_used)] // Tests may panic on assertion failures

use proptest::prelude::*;
use todolist_domain::{MAX_FIELD_LENGTH, TodoItem, TodoList, ValidationError};

proptest! {
    #[test]
    fn fields_within_bounds_are_accepted_verbatim(
        name in "[a-zA-Z0-9 ]{1,100}",
        description in "[a-zA-Z0-9 ]{1,100}",
    ) {
        let list = TodoList::create(name.clone(), description.clone(), None, None).unwrap();
        prop_assert_eq!(list.name(), name.as_str());
        prop_assert_eq!(list.description(), description.as_str());

        let item = TodoItem::create(name.clone(), description.clone(), None).unwrap();
        prop_assert_eq!(item.name(), name.as_str());
        prop_assert_eq!(item.description(), description.as_str());
    }

    #[test]
    fn oversized_name_is_rejected_naming_the_field(extra in 1usize..64) {
        let name = "x".repeat(MAX_FIELD_LENGTH + extra);
        let err = TodoItem::create(name, "fine".to_string(), None).unwrap_err();
        prop_assert_eq!(
            err,
            ValidationError::TooLong { field: "name", max: MAX_FIELD_LENGTH }
        );
    }

    #[test]
    fn oversized_description_is_rejected_naming_the_field(extra in 1usize..64) {
        let description = "x".repeat(MAX_FIELD_LENGTH + extra);
        let err = TodoList::create("fine".to_string(), description, None, None).unwrap_err();
        prop_assert_eq!(
            err,
            ValidationError::TooLong { field: "description", max: MAX_FIELD_LENGTH }
        );
    }
}
