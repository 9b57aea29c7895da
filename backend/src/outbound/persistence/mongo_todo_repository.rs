//! MongoDB-backed implementation of the [`TodoRepository`] port.
//!
//! Items live in a single collection whose documents mirror the `Todo` field
//! representation. The adapter only translates between the domain type and
//! [`TodoDocument`]; it holds no business logic.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::{Collection, Database};
use tracing::debug;

use super::models::TodoDocument;
use crate::domain::Todo;
use crate::domain::ports::{TodoPersistenceError, TodoRepository};

/// Name of the collection holding to-do documents.
pub const TODOS_COLLECTION: &str = "todos";

/// MongoDB-backed to-do repository.
#[derive(Clone)]
pub struct MongoTodoRepository {
    collection: Collection<TodoDocument>,
}

impl MongoTodoRepository {
    /// Create a repository over the `todos` collection of `database`.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(TODOS_COLLECTION),
        }
    }
}

/// Map driver errors to port errors.
fn map_driver_error(error: &MongoError) -> TodoPersistenceError {
    debug!(error = %error, "mongodb operation failed");
    match error.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) | ErrorKind::DnsResolve { .. } => {
            TodoPersistenceError::connection(error.to_string())
        }
        ErrorKind::BsonDeserialization(_) => TodoPersistenceError::decode(error.to_string()),
        _ => TodoPersistenceError::query(error.to_string()),
    }
}

#[async_trait]
impl TodoRepository for MongoTodoRepository {
    async fn create(&self, todo: &Todo) -> Result<(), TodoPersistenceError> {
        self.collection
            .insert_one(TodoDocument::from(todo))
            .await
            .map(|_| ())
            .map_err(|err| map_driver_error(&err))
    }

    async fn list(&self) -> Result<Vec<Todo>, TodoPersistenceError> {
        // The cursor is dropped on every return path below, which closes it
        // on the server as well.
        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|err| map_driver_error(&err))?;

        let mut todos = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|err| map_driver_error(&err))?
        {
            let todo = Todo::try_from(document)
                .map_err(|err| TodoPersistenceError::decode(err.to_string()))?;
            todos.push(todo);
        }
        Ok(todos)
    }
}
