//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, optional migrations, service wiring and the
//! lifecycle of both listeners.

use crate::application::services::{AccountService, RecordService};
use crate::config::Config;
use crate::infrastructure::persistence::{MySqlAccountRepository, MySqlRecordRepository};
use crate::routes::{account_router, normalize, record_router};
use crate::state::{AccountState, RecordState};

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::{Router, ServiceExt};
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Opens the shared connection pool using the configured limits.
///
/// # Errors
///
/// Returns an error if the database cannot be reached.
pub async fn connect_pool(config: &Config) -> Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Runs both services with the given configuration.
///
/// Initializes:
/// - MySQL connection pool shared by both services
/// - Migrations, when `RUN_MIGRATIONS` is enabled
/// - Account service on `ACCOUNT_LISTEN`
/// - Record service on `RECORD_LISTEN`
///
/// Both listeners stop together on Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - A migration fails
/// - Either listener fails to bind
/// - Either server stops with a runtime error
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to apply migrations")?;
        tracing::info!("Migrations applied");
    }

    let pool = Arc::new(pool);

    let account_repository = Arc::new(MySqlAccountRepository::new(pool.clone()));
    let record_repository = Arc::new(MySqlRecordRepository::new(pool.clone()));

    let account_state = AccountState::new(Arc::new(AccountService::new(account_repository)));
    let record_state = RecordState::new(Arc::new(RecordService::new(record_repository)));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    tokio::try_join!(
        serve(
            "account",
            &config.account_listen_addr,
            account_router(account_state),
            shutdown_rx.clone(),
        ),
        serve(
            "record",
            &config.record_listen_addr,
            record_router(record_state),
            shutdown_rx,
        ),
    )?;

    pool.close().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn serve(
    service: &'static str,
    listen_addr: &str,
    router: Router,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let addr: SocketAddr = listen_addr
        .parse()
        .with_context(|| format!("Invalid {service} listen address '{listen_addr}'"))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {service} service to {addr}"))?;
    tracing::info!(service, "Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(normalize(router)),
    )
    .with_graceful_shutdown(async move {
        let _ = shutdown.wait_for(|stop| *stop).await;
    })
    .await
    .with_context(|| format!("{service} service terminated"))?;

    tracing::info!(service, "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
