//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`        - Landing page with the scan form
//! - `GET  /scan`    - Run a scan from query parameters
//! - `POST /scan`    - Run a scan from a form or JSON body
//! - `GET  /health`  - Component health checks
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;
use crate::web;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::public_routes(behind_proxy))
        .merge(api::routes::scan_routes(behind_proxy))
        .merge(api::routes::operational_routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// JSON 404 for unknown paths.
async fn fallback_handler() -> AppError {
    AppError::not_found("No such endpoint", serde_json::json!({}))
}
