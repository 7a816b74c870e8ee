//! # WCAG Scanner
//!
//! An automated WCAG 2.2 accessibility scanning service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Scan issues, reports, rules, and the page fetcher trait
//! - **Application Layer** ([`application`]) - Scan orchestration services
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP page retrieval
//! - **API Layer** ([`api`]) - Scan endpoint handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML landing page
//!
//! ## Features
//!
//! - Automated WCAG 2.2 Level A/AA checks (image alternatives, form labels, link text)
//! - Downloadable CSV and JSON reports
//! - Landing page with a plain HTML form, no client-side scripting required
//! - Rate limiting and observability
//! - Companion CLI for scanning URLs or local HTML files
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service (defaults to 0.0.0.0:3000)
//! cargo run
//!
//! # Scan a page from the terminal
//! cargo run --bin scan -- --url https://example.com --output report.csv
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ScanService;
    pub use crate::domain::fetcher::{FetchError, FetchedPage, PageFetcher};
    pub use crate::domain::report::{ReportFormat, ScanReport};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
