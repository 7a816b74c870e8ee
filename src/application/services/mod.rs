//! Business logic services for the application layer.

pub mod scan_service;

pub use scan_service::ScanService;
