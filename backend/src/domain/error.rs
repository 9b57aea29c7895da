//! Domain-level error type.
//!
//! Transport agnostic: the HTTP adapter maps [`ErrorCode`] to a status code.
//! Messages are kept for logs only and never reach clients.

use std::fmt;

use super::TraceId;

/// Stable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request body could not be decoded.
    InvalidRequest,
    /// The route exists but does not support the request method.
    MethodNotAllowed,
    /// Storage or another dependency failed.
    InternalError,
}

/// Domain error carrying a category, a log message and the trace id that was
/// in scope when it was created.
///
/// # Examples
/// ```
/// use todo_backend::domain::{Error, ErrorCode};
///
/// let err = Error::invalid_request("body is not JSON");
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert!(err.trace_id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error, capturing the current trace identifier if any.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Replace the captured trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Log message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier captured at construction.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::MethodNotAllowed`].
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MethodNotAllowed, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
