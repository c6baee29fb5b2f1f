//! Name validation for lists and todos.
//!
//! Both checks are pure: they inspect the candidate name (and, for lists, the
//! lists already stored) and report the first rule that fails. Callers are
//! expected to surface the error's message to the user.

use crate::constants::{
    ERROR_LIST_NAME_DUPLICATE, ERROR_LIST_NAME_LENGTH, ERROR_TODO_NAME_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH,
};
use crate::models::List;

/// What kind of name failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    List,
    Todo,
}

/// Reasons a list or todo name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", invalid_length_message(.0))]
    InvalidLength(NameKind),

    #[error("{}", ERROR_LIST_NAME_DUPLICATE)]
    DuplicateName,
}

fn invalid_length_message(kind: &NameKind) -> &'static str {
    match kind {
        NameKind::List => ERROR_LIST_NAME_LENGTH,
        NameKind::Todo => ERROR_TODO_NAME_LENGTH,
    }
}

fn has_valid_length(name: &str) -> bool {
    (NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&name.trim().chars().count())
}

/// Checks a list name against the length bounds and the names of `existing` lists.
///
/// Uniqueness is an exact, case-sensitive comparison of the trimmed name.
pub fn validate_list_name(name: &str, existing: &[List]) -> Result<(), ValidationError> {
    if !has_valid_length(name) {
        return Err(ValidationError::InvalidLength(NameKind::List));
    }

    let name = name.trim();
    if existing.iter().any(|list| list.name == name) {
        return Err(ValidationError::DuplicateName);
    }

    Ok(())
}

/// Checks a todo name against the length bounds. Duplicate todo names are allowed.
pub fn validate_todo_name(name: &str) -> Result<(), ValidationError> {
    if has_valid_length(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLength(NameKind::Todo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists(names: &[&str]) -> Vec<List> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| List::new(i as i32 + 1, *name))
            .collect()
    }

    #[test]
    fn test_list_name_valid() {
        let existing = lists(&["Groceries", "Work"]);
        assert_eq!(validate_list_name("Chores", &existing), Ok(()));
        assert_eq!(validate_list_name("a", &existing), Ok(()));
        assert_eq!(validate_list_name(&"x".repeat(100), &existing), Ok(()));
    }

    #[test]
    fn test_list_name_length_bounds() {
        assert_eq!(
            validate_list_name("", &[]),
            Err(ValidationError::InvalidLength(NameKind::List))
        );
        assert_eq!(
            validate_list_name("   ", &[]),
            Err(ValidationError::InvalidLength(NameKind::List))
        );
        assert_eq!(
            validate_list_name(&"x".repeat(101), &[]),
            Err(ValidationError::InvalidLength(NameKind::List))
        );
    }

    #[test]
    fn test_list_name_length_counts_characters() {
        // 100 multi-byte characters are still within bounds
        assert_eq!(validate_list_name(&"é".repeat(100), &[]), Ok(()));
    }

    #[test]
    fn test_list_name_duplicate_is_case_sensitive() {
        let existing = lists(&["Groceries"]);
        assert_eq!(
            validate_list_name("Groceries", &existing),
            Err(ValidationError::DuplicateName)
        );
        assert_eq!(
            validate_list_name("  Groceries ", &existing),
            Err(ValidationError::DuplicateName)
        );
        assert_eq!(validate_list_name("groceries", &existing), Ok(()));
    }

    #[test]
    fn test_length_checked_before_uniqueness() {
        let existing = lists(&[""]);
        assert_eq!(
            validate_list_name("", &existing),
            Err(ValidationError::InvalidLength(NameKind::List))
        );
    }

    #[test]
    fn test_todo_name() {
        assert_eq!(validate_todo_name("Milk"), Ok(()));
        assert_eq!(
            validate_todo_name(""),
            Err(ValidationError::InvalidLength(NameKind::Todo))
        );
        assert_eq!(
            validate_todo_name(&"x".repeat(101)),
            Err(ValidationError::InvalidLength(NameKind::Todo))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::InvalidLength(NameKind::List).to_string(),
            ERROR_LIST_NAME_LENGTH
        );
        assert_eq!(
            ValidationError::InvalidLength(NameKind::Todo).to_string(),
            ERROR_TODO_NAME_LENGTH
        );
        assert_eq!(ValidationError::DuplicateName.to_string(), ERROR_LIST_NAME_DUPLICATE);
    }
}
