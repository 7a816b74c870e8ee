//! HTTP request handlers for API endpoints.

pub mod health;
pub mod scan;

pub use health::health_handler;
pub use scan::{scan_get_handler, scan_post_handler};
