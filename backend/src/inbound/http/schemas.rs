//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`; the
//! wrappers here mirror their serialised shape for the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Todo`].
#[derive(ToSchema)]
#[schema(as = Todo)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TodoSchema {
    /// Opaque identifier assigned at creation.
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    id: String,
    /// Item text with surrounding whitespace removed.
    #[schema(example = "Buy milk")]
    text: String,
}
