//! Upstream feed fetcher implementation
//!
//! Plain reqwest transport with a browser-like header set; several feed
//! hosts answer 403 to anything that does not look like a browser.

use async_trait::async_trait;
use reqwest::{header, Client};

use crate::domain::ports::FeedFetcher;
use crate::error::FeedFetchError;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122 Safari/537.36";
const ACCEPT: &str = "application/rss+xml, application/xml;q=0.9, */*;q=0.8";

/// HTTP implementation of the [`FeedFetcher`] port.
pub struct FeedFetcherImpl {
    http: Client,
}

impl FeedFetcherImpl {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }
}

impl Default for FeedFetcherImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedFetcher for FeedFetcherImpl {
    async fn fetch(&self, url: &str) -> Result<String, FeedFetchError> {
        tracing::debug!("fetching upstream feed: {}", url);

        let response = self
            .http
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, ACCEPT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedFetchError::Upstream {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
