//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ScanService;

/// State shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub scan_service: Arc<ScanService>,
}

impl AppState {
    pub fn new(scan_service: Arc<ScanService>) -> Self {
        Self { scan_service }
    }
}
