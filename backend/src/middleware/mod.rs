//! Request middleware.
//!
//! Purpose: wrap every request with cross-origin headers and a request-scoped
//! trace identifier.

pub mod cors;
pub mod trace;

pub use cors::Cors;
pub use trace::Trace;
