//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page.
///
/// Renders `templates/index.html`: a single form posting a URL to `/scan`,
/// plus a short note documenting the equivalent `GET /scan?url=...` API.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct LandingTemplate {
    /// Crate version shown in the page footer.
    pub version: &'static str,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn landing_handler() -> impl IntoResponse {
    LandingTemplate {
        version: env!("CARGO_PKG_VERSION"),
    }
}
