//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the health probe, the two `/todos` operations and
//! the schema wrappers from [`crate::inbound::http::schemas`]. The document
//! is not served by the application; `cargo run --bin openapi-dump` exports
//! it for external tooling.

use crate::inbound::http::schemas::TodoSchema;
use crate::inbound::http::todos::CreateTodoRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo backend API",
        description = "Create and list to-do items; liveness probe."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::todos::create_todo,
        crate::inbound::http::todos::list_todos,
        crate::inbound::http::health::health,
    ),
    components(schemas(TodoSchema, CreateTodoRequest)),
    tags(
        (name = "todos", description = "Operations on to-do items"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
