//! Liveness endpoint.

use crate::config::ServerConfig;
use crate::error::Result;
use axum::routing::get;
use axum::Router;
use log::info;
use tokio::net::TcpListener;

/// Path answered by the health check.
pub const HEALTH_PATH: &str = "/health";

/// Builds the HTTP routes.
pub fn router() -> Router {
    Router::new().route(HEALTH_PATH, get(health))
}

async fn health() -> &'static str {
    "ok"
}

/// Binds to the configured address and serves until the process exits.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server running on {}", addr);
    axum::serve(listener, router()).await?;
    Ok(())
}
