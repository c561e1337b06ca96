//! Liveness server.
//!
//! Answers `GET /health` with `ok`.
//!
//! # Environment Variables
//!
//! - `PORT`: listen port (default `8080`)
//! - `BIND_ADDR`: listen address (default `0.0.0.0`)
//! - `RUST_LOG`: logging verbosity

use bahttext::{server, Result, ServerConfig};
use log::error;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        error!("Server stopped: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = ServerConfig::from_env()?;
    server::serve(&config).await
}
