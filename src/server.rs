//! HTTP server initialization and runtime setup.
//!
//! Handles fetcher construction, scan service wiring, and Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;

use crate::application::services::ScanService;
use crate::config::Config;
use crate::infrastructure::fetch::HttpPageFetcher;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - HTTP page fetcher with timeout, size cap, and retry policy
/// - Scan service with the built-in rule set
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let fetcher = HttpPageFetcher::new(
        Duration::from_secs(config.fetch_timeout_seconds),
        config.fetch_max_bytes,
        config.fetch_retries,
    )
    .context("Failed to build HTTP client")?;

    let scan_service = Arc::new(ScanService::new(
        Arc::new(fetcher),
        config.allow_private_targets,
    ));
    tracing::info!("Scan service ready ({} rules)", scan_service.rule_count());

    let state = AppState::new(scan_service);

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
