//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, service wiring, and Axum server lifecycle.

use crate::api::middleware::cors;
use crate::application::services::{CodeAllocator, UrlService};
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::{
    InMemoryUrlRepository, PgUrlRepository, TimedUrlRepository,
};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured record store (PostgreSQL with migrations, or in-memory)
/// - Per-operation store timeout
/// - Code allocation and URL services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - A CORS origin is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;
    let repository: Arc<dyn UrlRepository> = Arc::new(TimedUrlRepository::new(
        store,
        Duration::from_secs(config.store_timeout_secs),
    ));

    let allocator = CodeAllocator::new(
        repository.clone(),
        DEFAULT_CODE_LENGTH,
        config.max_allocation_attempts,
    );
    let url_service = UrlService::new(repository, allocator, config.base_url.clone());
    let state = AppState::new(Arc::new(url_service));

    let cors = cors::layer(&config.cors_allowed_origins).context("Invalid CORS origin")?;
    let app = app_router(state, cors);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Creates the record store selected by `STORE_BACKEND`.
async fn build_store(config: &Config) -> Result<Arc<dyn UrlRepository>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, records are lost on restart");
            Ok(Arc::new(InMemoryUrlRepository::new()))
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set for the postgres backend")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;

            Ok(Arc::new(PgUrlRepository::new(Arc::new(pool))))
        }
    }
}

/// Resolves once Ctrl+C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
