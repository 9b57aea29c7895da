//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::middleware::{Cors, Trace};

/// Assemble the application: router, shared state, and middleware.
///
/// `Trace` is the outermost layer so preflight responses answered by `Cors`
/// still carry a trace identifier.
pub fn build_app(
    state: web::Data<HttpState>,
    cors: Cors,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(cors)
        .wrap(Trace)
        .configure(configure)
}

/// Construct an Actix HTTP server around the shared handler state.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(state: web::Data<HttpState>, config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig { host, port, cors } = config;

    let server = HttpServer::new(move || build_app(state.clone(), cors.clone()))
        .bind((host.as_str(), port))?
        .run();

    Ok(server)
}
