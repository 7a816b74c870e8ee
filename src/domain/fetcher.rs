//! Page retrieval interface.

use async_trait::async_trait;
use url::Url;

/// A document retrieved from a scan target.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code of the response.
    pub status: u16,
    /// Response body decoded as text.
    pub html: String,
}

/// Errors that can occur while retrieving a scan target.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be completed (DNS, connect, timeout, TLS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body exceeded the configured size cap.
    #[error("response exceeded {limit} bytes")]
    TooLarge { limit: u64 },
}

impl FetchError {
    /// Whether retrying the request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}

/// Interface for retrieving the markup of a scan target.
///
/// # Implementations
///
/// - [`crate::infrastructure::fetch::HttpPageFetcher`] - reqwest-based HTTP(S) client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Retrieves the document at `url`.
    ///
    /// A non-2xx response is NOT an error: the body is still returned so the
    /// scan can proceed against whatever the server sent. Only transport
    /// failures and oversized bodies are reported as errors.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] when the request cannot be completed
    /// and [`FetchError::TooLarge`] when the body exceeds the size cap.
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}
