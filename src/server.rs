//! Process wiring: store actor, router, listener and graceful shutdown.

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::api::{self, AppState};
use crate::app_system::ProductSystem;
use crate::config::AppConfig;
use crate::domain::sample_catalog;

/// Start the store, serve HTTP until a shutdown signal, then stop the store.
pub async fn start_server(config: AppConfig) -> Result<(), String> {
    let seed = if config.seed_sample_products {
        sample_catalog()
    } else {
        Vec::new()
    };
    let system = ProductSystem::new(seed);

    let app = api::router(AppState::new(
        system.product_client.clone(),
        config.api_key.clone(),
    ));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    info!(address = %addr, "Server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
