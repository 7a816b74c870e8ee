//! Scan report assembly and encodings.
//!
//! A report carries the scanned target, a UTC timestamp, per-level counts and
//! the issue rows. It renders as CSV (the spreadsheet encoding served as a
//! download) or pretty JSON.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::issue::{ConformanceLevel, Issue};

/// Spreadsheet column order, matching the JSON field names of [`Issue`].
const COLUMNS: [&str; 8] = [
    "rule",
    "wcag_principle",
    "wcag_success_criterion",
    "level",
    "description",
    "context",
    "selector",
    "recommendation",
];

/// Report encodings offered to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ReportFormat::Csv => "text/csv; charset=utf-8",
            ReportFormat::Json => "application/json",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Error for unrecognized report format parameters.
#[derive(Debug, thiserror::Error)]
#[error("unknown report format '{0}', expected 'csv' or 'json'")]
pub struct UnknownFormat(pub String);

/// Errors that can occur while encoding a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Issue counts aggregated by conformance level.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ScanSummary {
    pub total: usize,
    pub level_a: usize,
    pub level_aa: usize,
    pub level_aaa: usize,
}

/// The outcome of scanning a single document.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// The scanned URL or file path.
    pub source: String,
    pub scanned_at: DateTime<Utc>,
    pub summary: ScanSummary,
    pub issues: Vec<Issue>,
}

impl ScanReport {
    /// Assembles a report from the issues found in `source`.
    pub fn new(source: impl Into<String>, issues: Vec<Issue>) -> Self {
        let mut summary = ScanSummary {
            total: issues.len(),
            ..ScanSummary::default()
        };
        for issue in &issues {
            match issue.level {
                ConformanceLevel::A => summary.level_a += 1,
                ConformanceLevel::AA => summary.level_aa += 1,
                ConformanceLevel::AAA => summary.level_aaa += 1,
            }
        }

        Self {
            source: source.into(),
            scanned_at: Utc::now(),
            summary,
            issues,
        }
    }

    /// Encodes the report in the requested format.
    pub fn render(&self, format: ReportFormat) -> Result<Vec<u8>, ReportError> {
        match format {
            ReportFormat::Csv => self.to_csv(),
            ReportFormat::Json => Ok(serde_json::to_vec_pretty(self)?),
        }
    }

    /// Attachment filename carrying the scan timestamp, e.g.
    /// `report_20250131T120000Z.csv`.
    pub fn file_name(&self, format: ReportFormat) -> String {
        format!(
            "report_{}.{}",
            self.scanned_at.format("%Y%m%dT%H%M%SZ"),
            format.extension()
        )
    }

    fn to_csv(&self) -> Result<Vec<u8>, ReportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(COLUMNS)?;

        for issue in &self.issues {
            let principle = issue.principle.to_string();
            let level = issue.level.to_string();
            writer.write_record([
                issue.rule,
                principle.as_str(),
                issue.success_criterion,
                level.as_str(),
                issue.description,
                issue.context.as_str(),
                issue.selector.as_str(),
                issue.recommendation,
            ])?;
        }

        writer
            .into_inner()
            .map_err(|e| ReportError::Csv(csv::Error::from(e.into_error())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::issue::Principle;

    fn sample_issue() -> Issue {
        Issue {
            rule: "IMG_ALT",
            principle: Principle::Perceivable,
            success_criterion: "1.1.1 Non-text Content",
            level: ConformanceLevel::A,
            description: "Image elements must have a text alternative (alt attribute).",
            context: "<img src=\"a.png\">".to_string(),
            selector: "img:nth-of-type(1)".to_string(),
            recommendation: "Add a descriptive alt attribute to the <img> element.",
        }
    }

    #[test]
    fn test_summary_counts_levels() {
        let report = ScanReport::new("https://example.com/", vec![sample_issue(), sample_issue()]);
        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.level_a, 2);
        assert_eq!(report.summary.level_aa, 0);
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let report = ScanReport::new("https://example.com/", vec![sample_issue()]);
        let bytes = report.render(ReportFormat::Csv).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "rule,wcag_principle,wcag_success_criterion,level,description,context,selector,recommendation"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("IMG_ALT,Perceivable,1.1.1 Non-text Content,A,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_csv_for_clean_page_is_header_only() {
        let report = ScanReport::new("https://example.com/", Vec::new());
        let bytes = report.render(ReportFormat::Csv).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_json_round_trips_summary() {
        let report = ScanReport::new("https://example.com/", vec![sample_issue()]);
        let bytes = report.render(ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["source"], "https://example.com/");
        assert_eq!(value["summary"]["total"], 1);
        assert_eq!(value["issues"][0]["rule"], "IMG_ALT");
    }

    #[test]
    fn test_file_name_carries_timestamp_and_extension() {
        let report = ScanReport::new("https://example.com/", Vec::new());
        let name = report.file_name(ReportFormat::Csv);
        assert!(name.starts_with("report_"));
        assert!(name.ends_with("Z.csv"));

        let name = report.file_name(ReportFormat::Json);
        assert!(name.ends_with("Z.json"));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("csv".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("xlsx".parse::<ReportFormat>().is_err());
    }
}
