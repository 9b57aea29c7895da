//! Port abstraction for to-do persistence adapters and their errors.
//!
//! Handlers depend on [`TodoRepository`] only. Production wires the MongoDB
//! adapter; tests use the in-memory doubles from `test_support` or the
//! generated `MockTodoRepository`.

use async_trait::async_trait;
use tracing::error;

use crate::domain::{Error, Todo};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by to-do repository adapters.
    pub enum TodoPersistenceError {
        /// The store could not be reached.
        Connection { message: String } => "todo repository connection failed: {message}",
        /// Insert or find failed during execution.
        Query { message: String } => "todo repository query failed: {message}",
        /// A stored record could not be turned into a [`Todo`].
        Decode { message: String } => "todo repository decode failed: {message}",
    }
}

impl From<TodoPersistenceError> for Error {
    fn from(err: TodoPersistenceError) -> Self {
        error!(error = %err, "todo persistence failed");
        Error::internal("Internal server error")
    }
}

/// Storage contract for to-do items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Store a fully populated item. The identifier is assigned by the caller.
    async fn create(&self, todo: &Todo) -> Result<(), TodoPersistenceError>;

    /// Return every stored item in store order; empty when nothing is stored.
    async fn list(&self) -> Result<Vec<Todo>, TodoPersistenceError>;
}
