//! End-to-end accessibility scan service.

use std::sync::Arc;

use scraper::Html;
use serde_json::json;

use crate::domain::fetcher::PageFetcher;
use crate::domain::report::ScanReport;
use crate::domain::rules::{Rule, default_rules};
use crate::error::AppError;
use crate::utils::target_url::{TargetUrlError, normalize_target};

/// Service running accessibility scans against remote pages or raw markup.
///
/// Validates the target, retrieves the document through the injected fetcher,
/// and evaluates the rule registry against the parsed markup.
pub struct ScanService {
    fetcher: Arc<dyn PageFetcher>,
    rules: Vec<Box<dyn Rule>>,
    allow_private_targets: bool,
}

impl ScanService {
    /// Creates a scan service with the built-in rule set.
    pub fn new(fetcher: Arc<dyn PageFetcher>, allow_private_targets: bool) -> Self {
        Self::with_rules(fetcher, default_rules(), allow_private_targets)
    }

    /// Creates a scan service with a custom rule registry.
    pub fn with_rules(
        fetcher: Arc<dyn PageFetcher>,
        rules: Vec<Box<dyn Rule>>,
        allow_private_targets: bool,
    ) -> Self {
        Self {
            fetcher,
            rules,
            allow_private_targets,
        }
    }

    /// Number of rules in the registry.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Fetches `raw_url` and scans the returned document.
    ///
    /// A non-2xx response is scanned anyway: servers commonly return error
    /// pages that are themselves worth auditing, and the original target may
    /// simply dislike automated clients. The status is logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `raw_url` is not an acceptable
    /// scan target and [`AppError::Upstream`] when the page cannot be
    /// retrieved.
    pub async fn scan_url(&self, raw_url: &str) -> Result<ScanReport, AppError> {
        let target = normalize_target(raw_url, self.allow_private_targets).map_err(|e| {
            let details = json!({ "url": raw_url, "reason": e.to_string() });
            match e {
                TargetUrlError::PrivateTarget => {
                    AppError::bad_request("Scan target is not allowed", details)
                }
                _ => AppError::bad_request("Invalid URL format", details),
            }
        })?;

        let page = self.fetcher.fetch(&target).await.map_err(|e| {
            AppError::upstream(
                format!("Unable to retrieve content from {target}"),
                json!({ "url": target.as_str(), "reason": e.to_string() }),
            )
        })?;

        if !(200..300).contains(&page.status) {
            tracing::warn!(
                status = page.status,
                url = %target,
                "target returned a non-success status, scanning response body anyway"
            );
        }

        Ok(self.scan_html(target.as_str(), &page.html))
    }

    /// Scans already-retrieved markup, e.g. a local file from the CLI.
    pub fn scan_html(&self, source: &str, html: &str) -> ScanReport {
        let document = Html::parse_document(html);

        let issues = self
            .rules
            .iter()
            .flat_map(|rule| rule.check(&document))
            .collect::<Vec<_>>();

        tracing::debug!(
            source,
            issues = issues.len(),
            rules = self.rules.len(),
            "scan finished"
        );

        ScanReport::new(source, issues)
    }
}
