//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `TODO_*` environment variables, matching CLI flags or a
//! configuration file; anything unset falls back to the local development
//! defaults below.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::middleware::cors::DEFAULT_ALLOWED_ORIGIN;

const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "worq_todo";
const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Startup settings for the to-do service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TODO")]
pub struct ServiceSettings {
    /// MongoDB connection string.
    pub mongo_uri: Option<String>,
    /// Database holding the `todos` collection.
    pub database: Option<String>,
    /// Interface the HTTP listener binds to.
    pub bind_host: Option<String>,
    /// TCP port for the HTTP listener.
    pub port: Option<u16>,
    /// Origin allowed by the CORS middleware.
    pub cors_origin: Option<String>,
}

impl ServiceSettings {
    /// Return the configured connection string, falling back to localhost.
    pub fn mongo_uri(&self) -> &str {
        self.mongo_uri.as_deref().unwrap_or(DEFAULT_MONGO_URI)
    }

    /// Return the configured database name.
    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    /// Return the configured bind host.
    pub fn bind_host(&self) -> &str {
        self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST)
    }

    /// Return the configured listener port.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the configured CORS origin.
    pub fn cors_origin(&self) -> &str {
        self.cors_origin.as_deref().unwrap_or(DEFAULT_ALLOWED_ORIGIN)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for service settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "TODO_MONGO_URI",
        "TODO_DATABASE",
        "TODO_BIND_HOST",
        "TODO_PORT",
        "TODO_CORS_ORIGIN",
    ];

    fn load_from_empty_args() -> ServiceSettings {
        ServiceSettings::load_from_iter([OsString::from("todo-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.mongo_uri(), "mongodb://localhost:27017");
        assert_eq!(settings.database(), "worq_todo");
        assert_eq!(settings.bind_host(), "0.0.0.0");
        assert_eq!(settings.port(), 8080);
        assert_eq!(settings.cors_origin(), "http://localhost:3000");
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TODO_MONGO_URI", Some("mongodb://db.internal:27018".to_owned())),
            ("TODO_DATABASE", Some("todo_staging".to_owned())),
            ("TODO_BIND_HOST", Some("127.0.0.1".to_owned())),
            ("TODO_PORT", Some("9090".to_owned())),
            ("TODO_CORS_ORIGIN", Some("https://todo.example".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.mongo_uri(), "mongodb://db.internal:27018");
        assert_eq!(settings.database(), "todo_staging");
        assert_eq!(settings.bind_host(), "127.0.0.1");
        assert_eq!(settings.port(), 9090);
        assert_eq!(settings.cors_origin(), "https://todo.example");
    }

    #[rstest]
    fn partial_overrides_keep_other_defaults() {
        let _guard = lock_env(VARS.map(|name| {
            let value = (name == "TODO_PORT").then(|| "3000".to_owned());
            (name, value)
        }));

        let settings = load_from_empty_args();
        assert_eq!(settings.port(), 3000);
        assert_eq!(settings.database(), "worq_todo");
    }
}
