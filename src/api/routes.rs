//! API route configuration.

use axum::{Router, routing::get};

use crate::api::handlers::{health_handler, scan_get_handler, scan_post_handler};
use crate::api::middleware::rate_limit;
use crate::state::AppState;

/// Scan endpoint routes, behind the strict rate limiter.
///
/// # Endpoints
///
/// - `GET  /scan` - Run a scan from query parameters (direct API use)
/// - `POST /scan` - Run a scan from a form or JSON body (landing page form)
pub fn scan_routes(behind_proxy: bool) -> Router<AppState> {
    Router::new()
        .route("/scan", get(scan_get_handler).post(scan_post_handler))
        .layer(rate_limit::secure_layer(behind_proxy))
}

/// Unthrottled operational routes.
///
/// # Endpoints
///
/// - `GET /health` - Component health checks
pub fn operational_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
