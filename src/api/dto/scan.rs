//! DTOs for the scan endpoint.

use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::domain::report::ReportFormat;
use crate::error::AppError;

/// Parameters accepted by `GET /scan` (query string) and `POST /scan`
/// (form-encoded or JSON body).
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ScanRequest {
    /// The page to scan. Required; browser-side validation on the landing
    /// page mirrors this, but direct API clients bypass the form.
    #[validate(url(message = "Invalid URL format"))]
    pub url: Option<String>,

    /// Report encoding: `csv` (default) or `json`.
    #[serde(default)]
    pub format: Option<String>,
}

impl ScanRequest {
    /// Validates the request and extracts the target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the `url` parameter is missing,
    /// empty, or not URL-shaped.
    pub fn target(&self) -> Result<&str, AppError> {
        self.validate()?;

        match self.url.as_deref() {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(AppError::bad_request(
                "Please provide a url parameter.",
                json!({ "parameter": "url" }),
            )),
        }
    }

    /// Parses the requested report format, defaulting to CSV.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for unrecognized formats.
    pub fn report_format(&self) -> Result<ReportFormat, AppError> {
        match self.format.as_deref() {
            None | Some("") => Ok(ReportFormat::default()),
            Some(value) => value.parse().map_err(|e: crate::domain::report::UnknownFormat| {
                AppError::bad_request(e.to_string(), json!({ "parameter": "format" }))
            }),
        }
    }
}
