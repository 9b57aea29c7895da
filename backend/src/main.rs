//! Service entry-point: loads settings, connects the document store and
//! serves the to-do API.

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use todo_backend::Cors;
use todo_backend::inbound::http::state::HttpState;
use todo_backend::outbound::persistence::{MongoConfig, MongoConnection, MongoTodoRepository};
use todo_backend::server::{ServerConfig, create_server};
use todo_backend::settings::ServiceSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load().wrap_err("failed to load settings")?;

    let mongo = MongoConfig::new(settings.mongo_uri(), settings.database());
    let connection = MongoConnection::connect(&mongo)
        .await
        .wrap_err("failed to connect to MongoDB")?;
    connection
        .ping()
        .await
        .wrap_err("MongoDB did not answer the startup ping")?;

    let repository = MongoTodoRepository::new(&connection.database());
    let state = web::Data::new(HttpState::new(Arc::new(repository)));
    let cors = Cors::new(settings.cors_origin()).wrap_err("invalid CORS origin")?;
    let config = ServerConfig::new(settings.bind_host(), settings.port()).with_cors(cors);

    let server = create_server(state, config).wrap_err("failed to bind HTTP listener")?;
    info!(
        host = settings.bind_host(),
        port = settings.port(),
        endpoints = "POST /todos, GET /todos, GET /health",
        "server listening"
    );

    let served = server.await;
    connection.shutdown().await;
    info!("MongoDB client shut down");
    served.wrap_err("HTTP server failed")
}
