//! Domain primitives, errors and ports.
//!
//! Purpose: define the to-do entity and the storage contract consumed by the
//! HTTP handlers. Nothing here depends on actix-web or the MongoDB driver.
//!
//! Public surface:
//! - Todo / TodoId: the to-do record and its identifier.
//! - Error / ErrorCode: transport-agnostic failure type.
//! - TraceId: request correlation identifier.
//! - ports: the `TodoRepository` persistence port.

pub mod error;
pub mod ports;
pub mod todo;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::todo::{Todo, TodoId, TodoValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
