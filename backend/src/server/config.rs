//! HTTP server configuration object.

use crate::middleware::Cors;

/// Builder-style configuration for creating the HTTP server.
#[derive(Clone)]
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) cors: Cors,
}

impl ServerConfig {
    /// Bind to `host:port` with the default CORS origin.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            cors: Cors::default(),
        }
    }

    /// Replace the CORS middleware configuration.
    #[must_use]
    pub fn with_cors(mut self, cors: Cors) -> Self {
        self.cors = cors;
        self
    }

    /// Return the host and port the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
