//! To-do item data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned when rebuilding a [`Todo`] from stored parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    EmptyId,
}

impl fmt::Display for TodoValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "todo id must not be empty"),
        }
    }
}

impl std::error::Error for TodoValidationError {}

/// Opaque to-do identifier.
///
/// Fresh identifiers are random UUID v4 strings. Identifiers read back from
/// the store are only required to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoId(String);

impl TodoId {
    /// Validate and construct a [`TodoId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, TodoValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`TodoId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    fn from_owned(id: String) -> Result<Self, TodoValidationError> {
        if id.is_empty() {
            return Err(TodoValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for TodoId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<TodoId> for String {
    fn from(value: TodoId) -> Self {
        value.0
    }
}

impl TryFrom<String> for TodoId {
    type Error = TodoValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A single to-do item.
///
/// ## Invariants
/// - `id` is non-empty and never changes after creation.
/// - `text` carries no leading or trailing whitespace when built through
///   [`Todo::new`]. Empty text is allowed.
///
/// Serialises as `{"id": "...", "text": "..."}`, which is both the HTTP
/// response shape and the stored document shape.
///
/// # Examples
/// ```
/// use todo_backend::domain::Todo;
///
/// let todo = Todo::new("  Buy milk  ");
/// assert_eq!(todo.text(), "Buy milk");
/// assert!(!todo.id().as_ref().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    text: String,
}

impl Todo {
    /// Create a new item with a freshly generated identifier and trimmed text.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            id: TodoId::random(),
            text: text.as_ref().trim().to_owned(),
        }
    }

    /// Rebuild an item from already-assigned parts, keeping `text` verbatim.
    pub fn from_parts(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Fallible constructor for raw string parts, e.g. decoded documents.
    pub fn try_from_strings(
        id: impl AsRef<str>,
        text: impl Into<String>,
    ) -> Result<Self, TodoValidationError> {
        Ok(Self::from_parts(TodoId::new(id)?, text))
    }

    /// Stable item identifier.
    pub fn id(&self) -> &TodoId {
        &self.id
    }

    /// Item text.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("Buy milk", "Buy milk")]
    #[case("  Buy milk  ", "Buy milk")]
    #[case("\t walk the dog\n", "walk the dog")]
    #[case("   ", "")]
    #[case("inner  spaces stay", "inner  spaces stay")]
    fn new_trims_surrounding_whitespace(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Todo::new(input).text(), expected);
    }

    #[rstest]
    fn new_assigns_uuid_shaped_identifiers() {
        let todo = Todo::new("x");
        let id = todo.id().as_ref();
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[rstest]
    fn new_assigns_distinct_identifiers() {
        let first = Todo::new("same");
        let second = Todo::new("same");
        assert_ne!(first.id(), second.id());
    }

    #[rstest]
    fn try_from_strings_rejects_empty_id() {
        let result = Todo::try_from_strings("", "text");
        assert_eq!(result, Err(TodoValidationError::EmptyId));
    }

    #[rstest]
    fn from_parts_keeps_text_verbatim() {
        let id = TodoId::new("id1").expect("valid id");
        let todo = Todo::from_parts(id, "  padded  ");
        assert_eq!(todo.text(), "  padded  ");
    }

    #[rstest]
    fn serialises_as_id_and_text() {
        let todo = Todo::try_from_strings("id1", "First todo").expect("valid todo");
        let value = serde_json::to_value(&todo).expect("serialise todo");
        assert_eq!(value, json!({"id": "id1", "text": "First todo"}));
    }

    #[rstest]
    fn deserialising_empty_id_fails() {
        let result: Result<Todo, _> = serde_json::from_value(json!({"id": "", "text": "x"}));
        assert!(result.is_err());
    }
}
