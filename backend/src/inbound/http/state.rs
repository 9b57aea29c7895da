//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::TodoRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// To-do persistence port.
    pub todos: Arc<dyn TodoRepository>,
}

impl HttpState {
    /// Construct state around a persistence port implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use todo_backend::inbound::http::state::HttpState;
    /// use todo_backend::test_support::InMemoryTodoRepository;
    ///
    /// let state = HttpState::new(Arc::new(InMemoryTodoRepository::default()));
    /// let _todos = state.todos.clone();
    /// ```
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }
}
