//! Health endpoint for load balancers and uptime checks.

use actix_web::{HttpResponse, http::header::ContentType};

/// Report that the process is serving requests.
///
/// Answers every method with `200 OK` and the plaintext body `OK`. The probe
/// does not touch the document store.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is up", body = String, content_type = "text/plain")
    )
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("OK")
}
