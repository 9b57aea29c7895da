//! Internal document structs for the `todos` collection.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use serde::{Deserialize, Serialize};

use crate::domain::{Todo, TodoValidationError};

/// Stored shape of a to-do item: `{ "id": ..., "text": ... }`.
///
/// The driver-generated `_id` field is ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TodoDocument {
    pub id: String,
    pub text: String,
}

impl From<&Todo> for TodoDocument {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id().to_string(),
            text: todo.text().to_owned(),
        }
    }
}

impl TryFrom<TodoDocument> for Todo {
    type Error = TodoValidationError;

    fn try_from(document: TodoDocument) -> Result<Self, Self::Error> {
        let TodoDocument { id, text } = document;
        Todo::try_from_strings(id, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc, oid::ObjectId};
    use rstest::rstest;

    #[rstest]
    fn document_mirrors_todo_fields() {
        let todo = Todo::try_from_strings("id1", "First todo").expect("valid todo");
        let document = bson::to_document(&TodoDocument::from(&todo)).expect("encode document");
        assert_eq!(document, doc! { "id": "id1", "text": "First todo" });
    }

    #[rstest]
    fn decoding_ignores_store_generated_object_id() {
        let raw = doc! { "_id": ObjectId::new(), "id": "id2", "text": "Second todo" };
        let document: TodoDocument = bson::from_document(raw).expect("decode document");
        let todo = Todo::try_from(document).expect("valid todo");
        assert_eq!(todo.id().as_ref(), "id2");
        assert_eq!(todo.text(), "Second todo");
    }

    #[rstest]
    fn decoding_rejects_missing_text() {
        let raw = doc! { "id": "id3" };
        assert!(bson::from_document::<TodoDocument>(raw).is_err());
    }

    #[rstest]
    fn empty_identifier_is_not_a_valid_todo() {
        let document = TodoDocument {
            id: String::new(),
            text: "orphan".to_owned(),
        };
        assert_eq!(Todo::try_from(document), Err(TodoValidationError::EmptyId));
    }
}
