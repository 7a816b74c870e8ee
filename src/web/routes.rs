//! Landing page route configuration.

use axum::{Router, routing::get};

use crate::api::middleware::rate_limit;
use crate::state::AppState;
use crate::web::handlers::landing_handler;

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Landing page with the scan form
pub fn public_routes(behind_proxy: bool) -> Router<AppState> {
    Router::new()
        .route("/", get(landing_handler))
        .layer(rate_limit::layer(behind_proxy))
}
