//! Helpers for controlling MongoDB-backed test behaviour.
//!
//! Adapter tests need a running server. They read its connection string from
//! `TODO_TEST_MONGO_URI` and are skipped when the variable is unset, so the
//! default test run stays hermetic.

/// Environment variable naming the server used by adapter tests.
pub const TEST_MONGO_URI_VAR: &str = "TODO_TEST_MONGO_URI";

/// Returns the configured test server URI, or `None` after printing a skip
/// marker when none is configured.
pub fn test_mongo_uri() -> Option<String> {
    match std::env::var(TEST_MONGO_URI_VAR) {
        Ok(uri) if !uri.trim().is_empty() => Some(uri),
        _ => {
            eprintln!("SKIP-TEST-MONGO: {TEST_MONGO_URI_VAR} is not set");
            None
        }
    }
}
