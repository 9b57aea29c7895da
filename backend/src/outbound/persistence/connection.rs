//! MongoDB client construction and liveness checks.
//!
//! The driver keeps its own connection pool behind [`mongodb::Client`], which
//! is cheap to clone and safe to share across request tasks. Timeouts here
//! only bound connection establishment and the startup ping; individual
//! queries use the driver defaults.
//!
//! # Example
//!
//! ```ignore
//! let config = MongoConfig::new("mongodb://localhost:27017", "worq_todo");
//! let connection = MongoConnection::connect(&config).await?;
//! connection.ping().await?;
//! let repo = MongoTodoRepository::new(&connection.database());
//! ```

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::{debug, info};

/// Errors raised while establishing or checking the MongoDB connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    /// The connection string could not be parsed or the client not built.
    #[error("failed to configure MongoDB client: {message}")]
    Configure { message: String },

    /// The server did not answer the ping command.
    #[error("failed to ping MongoDB: {message}")]
    Ping { message: String },
}

impl ConnectionError {
    /// Create a configuration error with the given message.
    pub fn configure(message: impl Into<String>) -> Self {
        Self::Configure {
            message: message.into(),
        }
    }

    /// Create a ping error with the given message.
    pub fn ping(message: impl Into<String>) -> Self {
        Self::Ping {
            message: message.into(),
        }
    }
}

/// Connection settings for the document store.
///
/// Defaults:
/// - `connect_timeout`: 10 seconds
/// - `server_selection_timeout`: 10 seconds
/// - `ping_timeout`: 5 seconds
#[derive(Debug, Clone)]
pub struct MongoConfig {
    uri: String,
    database: String,
    connect_timeout: Duration,
    server_selection_timeout: Duration,
    ping_timeout: Duration,
}

impl MongoConfig {
    /// Create a configuration for `database` reachable at `uri`.
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            connect_timeout: Duration::from_secs(10),
            server_selection_timeout: Duration::from_secs(10),
            ping_timeout: Duration::from_secs(5),
        }
    }

    /// Set the socket connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set how long the driver waits for a suitable server.
    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }

    /// Set the deadline for the startup ping.
    pub fn with_ping_timeout(mut self, timeout: Duration) -> Self {
        self.ping_timeout = timeout;
        self
    }

    /// Connection string.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Database name.
    pub fn database(&self) -> &str {
        &self.database
    }
}

/// A connected client bound to one database.
#[derive(Clone)]
pub struct MongoConnection {
    client: Client,
    database: String,
    ping_timeout: Duration,
}

impl MongoConnection {
    /// Build a client from `config`.
    ///
    /// The driver connects lazily, so this succeeds without a reachable
    /// server; call [`MongoConnection::ping`] to confirm connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::Configure`] when the connection string is
    /// invalid.
    pub async fn connect(config: &MongoConfig) -> Result<Self, ConnectionError> {
        let mut options = ClientOptions::parse(config.uri())
            .await
            .map_err(|err| ConnectionError::configure(err.to_string()))?;
        options.app_name = Some("todo-backend".to_owned());
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let client = Client::with_options(options)
            .map_err(|err| ConnectionError::configure(err.to_string()))?;
        debug!(database = config.database(), "mongodb client configured");

        Ok(Self {
            client,
            database: config.database.clone(),
            ping_timeout: config.ping_timeout,
        })
    }

    /// Send a `ping` command, bounded by the configured ping timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::Ping`] when the server does not answer in
    /// time or answers with an error.
    pub async fn ping(&self) -> Result<(), ConnectionError> {
        let database = self.database();
        let command = database.run_command(doc! { "ping": 1 });
        match tokio::time::timeout(self.ping_timeout, command).await {
            Ok(Ok(_)) => {
                info!(database = %self.database, "connected to mongodb");
                Ok(())
            }
            Ok(Err(err)) => Err(ConnectionError::ping(err.to_string())),
            Err(_) => Err(ConnectionError::ping(format!(
                "no reply within {:?}",
                self.ping_timeout
            ))),
        }
    }

    /// Handle to the configured database.
    pub fn database(&self) -> Database {
        self.client.database(&self.database)
    }

    /// Close pooled connections and end server sessions.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        debug!("mongodb client shut down");
    }
}
