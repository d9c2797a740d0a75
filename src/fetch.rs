//! HTTP transport behind a trait seam.
//!
//! The crawl only ever needs "give me the decoded text of this URL", so the
//! transport is a single-method [`Fetcher`] trait. Production uses the
//! reqwest-backed [`HttpFetcher`]; tests substitute a canned-page fetcher to
//! exercise the crawl and extractors offline.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Result, ScrapeError};

/// Retrieves the decoded text of a URL. The single transport seam of the
/// pipeline; everything above it is deterministic given the returned pages.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// reqwest-backed fetcher. Body decoding honors the response charset, so
/// pages served in encodings other than UTF-8 come back as proper strings.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        HttpFetcher {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ScrapeError::Fetch {
                url: url.to_string(),
                cause: e.to_string(),
            })?;
        let body = response.text().await.map_err(|e| ScrapeError::Fetch {
            url: url.to_string(),
            cause: e.to_string(),
        })?;
        debug!(%url, bytes = body.len(), "Fetched document");
        Ok(body)
    }
}
