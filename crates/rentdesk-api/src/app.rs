//! Application builder: wires router, middleware and state into an Axum app.

use std::future::IntoFuture;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;

use rentdesk_core::config::AppConfig;
use rentdesk_core::error::{AppError, ErrorKind};
use rentdesk_database::{DatabasePool, Stores};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the RentDesk server until Ctrl+C or SIGTERM.
///
/// In-flight requests are given `server.shutdown_grace_seconds` to finish
/// after the signal before the server stops.
pub async fn run_server(
    config: AppConfig,
    stores: Stores,
    database: Option<DatabasePool>,
) -> Result<(), AppError> {
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let mut state = AppState::new(config, &stores);
    if let Some(database) = database {
        state = state.with_database(database);
    }
    tracing::info!(
        root_domain = %state.resolver.root_domain(),
        persistent = state.database.is_some(),
        "Application state initialized"
    );

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}: {e}"), e)
        })?;

    tracing::info!(address = %addr, "RentDesk server listening");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .into_future();

    let drain_deadline = async move {
        let _ = shutdown_rx.wait_for(|stopping| *stopping).await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server => {
            result.map_err(|e| {
                AppError::with_source(ErrorKind::Internal, format!("Server error: {e}"), e)
            })?;
        }
        () = drain_deadline => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Shutdown grace period elapsed, dropping open connections"
            );
        }
    }

    tracing::info!("RentDesk server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutdown signal received, draining connections");
}
