//! Shared helper utilities for backend integration tests.

pub mod mongo_skip;

use std::sync::Arc;

use actix_web::web;
use todo_backend::domain::ports::TodoRepository;
use todo_backend::inbound::http::state::HttpState;

/// Wrap a repository in the shared handler state.
pub fn state_for(repo: Arc<dyn TodoRepository>) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(repo))
}
