#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;
use wcag_scanner::application::services::ScanService;
use wcag_scanner::domain::fetcher::{FetchError, FetchedPage, PageFetcher};
use wcag_scanner::state::AppState;

/// Fixture with one violation per built-in rule.
pub const PAGE_WITH_ISSUES: &str = r#"
    <html><body>
        <img src="logo.png">
        <form><input type="text" name="q"></form>
        <a href="/docs">click here</a>
    </body></html>
"#;

/// Fixture that satisfies every built-in rule.
pub const CLEAN_PAGE: &str = r#"
    <html><body>
        <img src="logo.png" alt="Logo">
        <form><label for="q">Search</label><input type="text" id="q" name="q"></form>
        <a href="/docs">Read the documentation</a>
    </body></html>
"#;

/// Fetcher returning a canned page regardless of the URL.
pub struct StaticFetcher {
    pub status: u16,
    pub html: String,
}

impl StaticFetcher {
    pub fn ok(html: &str) -> Self {
        Self {
            status: 200,
            html: html.to_string(),
        }
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, _url: &Url) -> Result<FetchedPage, FetchError> {
        Ok(FetchedPage {
            status: self.status,
            html: self.html.clone(),
        })
    }
}

/// Fetcher that always fails with a transport error.
pub struct FailingFetcher;

#[async_trait]
impl PageFetcher for FailingFetcher {
    async fn fetch(&self, _url: &Url) -> Result<FetchedPage, FetchError> {
        Err(FetchError::Transport("connection refused".to_string()))
    }
}

pub fn state_with_fetcher(fetcher: impl PageFetcher + 'static) -> AppState {
    AppState::new(Arc::new(ScanService::new(Arc::new(fetcher), false)))
}

pub fn state_with_page(html: &str) -> AppState {
    state_with_fetcher(StaticFetcher::ok(html))
}
