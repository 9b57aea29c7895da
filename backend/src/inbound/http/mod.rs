//! HTTP inbound adapter exposing REST endpoints.
//!
//! [`configure`] is the router: `/health` answers any method, while `/todos`
//! dispatches on the request method. Unknown paths fall through to
//! actix-web's default 404.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod todos;

pub use error::ApiResult;

use actix_web::web;

/// Register the health and to-do routes.
///
/// Callers provide a [`state::HttpState`] through `App::app_data`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use todo_backend::inbound::http::{configure, state::HttpState};
/// use todo_backend::test_support::InMemoryTodoRepository;
///
/// let state = web::Data::new(HttpState::new(Arc::new(InMemoryTodoRepository::default())));
/// let _app = App::new().app_data(state).configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json = web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(error::json_error_handler);

    cfg.service(web::resource("/health").to(health::health))
        .service(
            web::resource("/todos")
                .app_data(json)
                .route(web::post().to(todos::create_todo))
                .route(web::get().to(todos::list_todos))
                .default_service(web::to(todos::method_not_allowed)),
        );
}
