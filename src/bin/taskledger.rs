//! Taskledger HTTP server binary.
//!
//! Reads [`ServerConfig`] from flags and environment, opens the selected
//! stores, and serves the API until interrupted. Pending audit writes are
//! flushed before exit.

use clap::Parser;
use std::sync::Arc;
use taskledger::audit::{
    adapters::{memory::InMemoryAuditLogRepository, postgres::PostgresAuditLogRepository},
    ports::AuditLogRepository,
};
use taskledger::auth::StaticCredentialVerifier;
use taskledger::config::{ServerConfig, StoreBackend};
use taskledger::http::{AppState, router};
use taskledger::postgres::{BoxError, apply_schema, connect};
use taskledger::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

type Stores = (Arc<dyn TaskRepository>, Arc<dyn AuditLogRepository>);

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    info!(config = ?config, "starting taskledger");

    let (task_repository, audit_log_repository) = open_stores(config.store_backend()).await?;
    let verifier = Arc::new(StaticCredentialVerifier::new(config.credentials()));
    let state = AppState::new(task_repository, audit_log_repository, verifier);

    let listener = TcpListener::bind(config.bind).await?;
    info!(address = %listener.local_addr()?, "listening");
    axum::serve(listener, router(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.flush_audit_log().await;
    info!("shutdown complete");
    Ok(())
}

async fn open_stores(backend: StoreBackend) -> Result<Stores, BoxError> {
    match backend {
        StoreBackend::InMemory => {
            warn!("no database configured; tasks and audit entries are kept in memory");
            Ok((
                Arc::new(InMemoryTaskRepository::new()),
                Arc::new(InMemoryAuditLogRepository::new()),
            ))
        }
        StoreBackend::Postgres {
            database_url,
            pool_size,
        } => {
            let pool = tokio::task::spawn_blocking(move || {
                let pool = connect(&database_url, pool_size)?;
                apply_schema(&pool)?;
                Ok::<_, BoxError>(pool)
            })
            .await??;
            info!(pool_size, "connected to PostgreSQL");
            Ok((
                Arc::new(PostgresTaskRepository::new(pool.clone())),
                Arc::new(PostgresAuditLogRepository::new(pool)),
            ))
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
