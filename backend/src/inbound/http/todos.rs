//! To-do collection handlers.
//!
//! ```text
//! POST /todos {"text":"Buy milk"}
//! GET /todos
//! ```

use actix_web::{HttpResponse, web};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::domain::{Error, Todo};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::TodoSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /todos`.
///
/// The body must be a JSON object. A missing or `null` `text` field becomes
/// empty text; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct CreateTodoRequest {
    #[schema(example = "  Buy milk  ")]
    pub text: String,
}

impl TryFrom<Map<String, Value>> for CreateTodoRequest {
    type Error = Error;

    fn try_from(mut body: Map<String, Value>) -> Result<Self, Self::Error> {
        let text = match body.remove("text") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text,
            Some(other) => {
                warn!(text = %other, "rejecting non-string todo text");
                return Err(Error::invalid_request("`text` must be a string"));
            }
        };
        Ok(Self { text })
    }
}

/// Create a to-do item.
///
/// The identifier is generated here and the text is trimmed before the item
/// reaches the repository. The response body is the stored item.
#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Created", body = TodoSchema),
        (status = 400, description = "Body is not a JSON object with a string `text`"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["todos"],
    operation_id = "createTodo"
)]
pub async fn create_todo(
    state: web::Data<HttpState>,
    payload: web::Json<Map<String, Value>>,
) -> ApiResult<HttpResponse> {
    let request = CreateTodoRequest::try_from(payload.into_inner())?;
    let todo = Todo::new(request.text);
    state.todos.create(&todo).await?;
    info!(todo_id = %todo.id(), "todo created");
    Ok(HttpResponse::Created().json(todo))
}

/// List every stored to-do item in repository order.
#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "Stored items, possibly empty", body = [TodoSchema]),
        (status = 500, description = "Storage failure")
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
pub async fn list_todos(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let todos = state.todos.list().await?;
    Ok(HttpResponse::Ok().json(todos))
}

/// Fallback for verbs other than GET and POST on `/todos`.
pub async fn method_not_allowed() -> ApiResult<HttpResponse> {
    Err(Error::method_not_allowed("unsupported method on /todos"))
}
