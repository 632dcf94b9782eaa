//! waitlist-gateway server entry point.
//!
//! Loads configuration, selects the storage backend, and starts the Axum
//! HTTP server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use waitlist_gateway::api;
use waitlist_gateway::app_state::AppState;
use waitlist_gateway::config::{AppConfig, LogFormat, StorageBackend};
use waitlist_gateway::persistence::{MemoryStorage, PostgresStorage, WaitlistStorage};
use waitlist_gateway::service::WaitlistService;
use waitlist_gateway::shutdown::shutdown_signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env().context("failed to load configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    tracing::info!(
        addr = %config.listen_addr,
        storage = %config.storage_backend,
        "starting waitlist-gateway"
    );

    // Build storage layer
    let storage = build_storage(&config).await?;

    // Build service layer
    let waitlist_service = WaitlistService::new(storage);

    // Build router
    let app = api::build_app(AppState::new(waitlist_service));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn build_storage(config: &AppConfig) -> anyhow::Result<Arc<dyn WaitlistStorage>> {
    match config.storage_backend {
        StorageBackend::Memory => Ok(Arc::new(MemoryStorage::new())),
        StorageBackend::Postgres => {
            let storage = PostgresStorage::connect(config)
                .await
                .context("failed to connect to PostgreSQL")?;
            storage
                .migrate()
                .await
                .context("failed to run database migrations")?;
            tracing::info!("database migrations applied");
            Ok(Arc::new(storage))
        }
    }
}
