//! reqwest-based page retrieval with streaming size cap and retry.

use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use url::Url;

use crate::domain::fetcher::{FetchError, FetchedPage, PageFetcher};

/// HTTP(S) implementation of [`PageFetcher`].
///
/// Bodies are streamed and aborted once they exceed the configured cap, so a
/// hostile target cannot exhaust memory. Transient transport failures are
/// retried with jittered exponential backoff.
pub struct HttpPageFetcher {
    client: reqwest::Client,
    max_bytes: u64,
    retries: usize,
}

impl HttpPageFetcher {
    /// Builds the fetcher and its underlying client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration, max_bytes: u64, retries: usize) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(concat!("wcag-scanner/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            max_bytes,
            retries,
        })
    }

    async fn fetch_once(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();

        if let Some(length) = response.content_length()
            && length > self.max_bytes
        {
            return Err(FetchError::TooLarge {
                limit: self.max_bytes,
            });
        }

        let mut body: Vec<u8> = Vec::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| FetchError::Transport(e.to_string()))?;

            if (body.len() + chunk.len()) as u64 > self.max_bytes {
                return Err(FetchError::TooLarge {
                    limit: self.max_bytes,
                });
            }

            body.extend_from_slice(&chunk);
        }

        Ok(FetchedPage {
            status,
            html: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let strategy = ExponentialBackoff::from_millis(250)
            .map(jitter)
            .take(self.retries);

        RetryIf::spawn(strategy, || self.fetch_once(url), FetchError::is_transient).await
    }
}
