//! TradeHub API Server library
//!
//! Mock HTTP backend for the TradeHub demo: router, configuration and the
//! in-memory application state.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use state::AppState;

/// Build the application router with all middleware attached
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors_layer(&state.config.cors);

    Router::new()
        .nest(tradehub_api::API_PREFIX, handlers::routes())
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the TradeHub API server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    use std::net::SocketAddr;

    let addr: SocketAddr = config.bind_address.parse()?;
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("TradeHub API server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
