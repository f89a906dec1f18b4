//! Ledgerbook Service - HTTP API for shared ledger bookkeeping.
//!
//! This is the main entry point for the ledgerbook service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledgerbook_service::{create_router, AppState, ServiceConfig};
use ledgerbook_store::LedgerStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ledgerbook=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Ledgerbook Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        database_path = %config.database_path,
        "Service configuration loaded"
    );

    // Open the SQLite store (runs migrations)
    let store = LedgerStore::connect(&config.database_path).await?;

    // Build app state and router
    let state = AppState::new(store.clone(), config.clone());
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    let served = axum::serve(listener, app).await;

    store.close().await;
    served?;

    Ok(())
}
