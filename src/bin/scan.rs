//! CLI scanner for wcag-scanner.
//!
//! Runs the same scan pipeline as the web service against a URL or a local
//! HTML file and writes the report to disk.
//!
//! # Usage
//!
//! ```bash
//! # Scan a page
//! cargo run --bin scan -- --url https://www.example.com
//!
//! # Scan a local file and emit JSON
//! cargo run --bin scan -- --file path/to/page.html --format json --output report.json
//! ```
//!
//! # Features
//!
//! - **URL or file input**: mutually exclusive, one required
//! - **CSV or JSON output**: spreadsheet-style rows or machine-readable JSON
//! - **Interactive Prompts**: confirmation before overwriting an existing report
//! - **Colored Output**: terminal-friendly summary using `colored` crate

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use colored::Colorize;
use dialoguer::Confirm;

use wcag_scanner::application::services::ScanService;
use wcag_scanner::domain::report::{ReportFormat, ScanReport};
use wcag_scanner::infrastructure::fetch::HttpPageFetcher;

/// Run a WCAG accessibility scan from the terminal.
#[derive(Parser)]
#[command(name = "scan")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["url", "file"])))]
struct Cli {
    /// URL of the page to scan
    #[arg(long)]
    url: Option<String>,

    /// Local HTML file to scan
    #[arg(long)]
    file: Option<PathBuf>,

    /// Output report path
    #[arg(short, long, default_value = "report.csv")]
    output: PathBuf,

    /// Report encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Overwrite the output file without asking
    #[arg(short = 'y', long)]
    yes: bool,

    /// Fetch timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

/// Report encodings exposed on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => ReportFormat::Csv,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let fetcher = HttpPageFetcher::new(Duration::from_secs(cli.timeout), 10 * 1024 * 1024, 2)
        .context("Failed to build HTTP client")?;

    // The operator runs the CLI by hand, so private/loopback targets are allowed.
    let service = ScanService::new(Arc::new(fetcher), true);

    let report = if let Some(url) = &cli.url {
        service
            .scan_url(url)
            .await
            .with_context(|| format!("Failed to scan {url}"))?
    } else {
        let file = cli.file.as_deref().expect("clap enforces url|file");
        let html = tokio::fs::read_to_string(file)
            .await
            .with_context(|| format!("Failed to read {}", file.display()))?;
        service.scan_html(&file.display().to_string(), &html)
    };

    if cli.output.exists() && !cli.yes {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", cli.output.display()))
            .default(false)
            .interact()?;

        if !overwrite {
            println!("{}", "Aborted.".yellow());
            return Ok(());
        }
    }

    let format: ReportFormat = cli.format.into();
    let bytes = report.render(format).context("Failed to encode report")?;
    tokio::fs::write(&cli.output, bytes)
        .await
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    print_summary(&report, &cli.output);

    Ok(())
}

fn print_summary(report: &ScanReport, output: &Path) {
    println!("Scanned: {}", report.source.bold());

    if report.summary.total == 0 {
        println!("{}", "No issues found.".green().bold());
    } else {
        println!(
            "{}",
            format!("{} issues found", report.summary.total).yellow().bold()
        );
        println!("  Level A:   {}", report.summary.level_a);
        println!("  Level AA:  {}", report.summary.level_aa);
        println!("  Level AAA: {}", report.summary.level_aaa);
    }

    println!("Report generated: {}", output.display());
}
