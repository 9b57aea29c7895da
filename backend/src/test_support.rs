//! Test doubles for the to-do persistence port.
//!
//! Compiled for unit tests and, through the `test-support` feature, for the
//! integration suites under `tests/`.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::Todo;
use crate::domain::ports::{TodoPersistenceError, TodoRepository};

/// Thread-safe in-memory repository that lists items in insertion order.
///
/// # Examples
/// ```
/// use todo_backend::domain::Todo;
/// use todo_backend::test_support::InMemoryTodoRepository;
///
/// let repo = InMemoryTodoRepository::with_todos([Todo::new("Buy milk")]);
/// assert_eq!(repo.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    todos: Mutex<Vec<Todo>>,
}

impl InMemoryTodoRepository {
    /// Seed the repository with existing items.
    pub fn with_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        Self {
            todos: Mutex::new(todos.into_iter().collect()),
        }
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.todos
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: PoisonError<T>) -> TodoPersistenceError {
    TodoPersistenceError::query("in-memory store lock poisoned")
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, todo: &Todo) -> Result<(), TodoPersistenceError> {
        self.todos.lock().map_err(poisoned)?.push(todo.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Todo>, TodoPersistenceError> {
        Ok(self.todos.lock().map_err(poisoned)?.clone())
    }
}

/// Repository whose every call fails with a connection error.
#[derive(Debug, Clone, Default)]
pub struct FailingTodoRepository {
    message: Option<String>,
}

impl FailingTodoRepository {
    /// Fail with a custom cause.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    fn error(&self) -> TodoPersistenceError {
        TodoPersistenceError::connection(
            self.message.as_deref().unwrap_or("store unavailable"),
        )
    }
}

#[async_trait]
impl TodoRepository for FailingTodoRepository {
    async fn create(&self, _todo: &Todo) -> Result<(), TodoPersistenceError> {
        Err(self.error())
    }

    async fn list(&self) -> Result<Vec<Todo>, TodoPersistenceError> {
        Err(self.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn lists_in_insertion_order() {
        let repo = InMemoryTodoRepository::default();
        for text in ["first", "second", "third"] {
            repo.create(&Todo::new(text)).await.expect("create succeeds");
        }

        let texts: Vec<String> = repo
            .list()
            .await
            .expect("list succeeds")
            .iter()
            .map(|todo| todo.text().to_owned())
            .collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[rstest]
    #[tokio::test]
    async fn failing_repository_reports_connection_errors() {
        let repo = FailingTodoRepository::with_message("refused");
        let err = repo.list().await.expect_err("list fails");
        assert_eq!(err, TodoPersistenceError::connection("refused"));
        assert!(repo.create(&Todo::new("x")).await.is_err());
    }
}
