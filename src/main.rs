mod actor_framework;
mod api;
mod app_system;
mod clients;
mod config;
mod domain;
mod error;
mod product_actor;
mod server;

#[cfg(test)]
mod mock_framework;

use tracing::info;

use crate::app_system::setup_tracing;
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Config first: it loads `.env`, which may set RUST_LOG.
    let config = AppConfig::from_env().map_err(|e| e.to_string())?;

    // Setup tracing once for the entire application
    setup_tracing();

    info!(
        address = %config.socket_addr(),
        seed_sample_products = config.seed_sample_products,
        "Starting Product API"
    );

    server::start_server(config).await
}
