//! Article service
//!
//! Fetches a syndication feed through the transport port and normalizes it
//! into display items. Normalization never fails; only the transport can.

use std::sync::Arc;

use crate::domain::entities::FeedItem;
use crate::domain::ports::FeedFetcher;
use crate::error::FeedFetchError;
use crate::feed;

/// Service producing the article carousel's items.
pub struct ArticleService<F>
where
    F: FeedFetcher,
{
    fetcher: Arc<F>,
}

impl<F> ArticleService<F>
where
    F: FeedFetcher,
{
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Fetch `url` and normalize it into at most `max_items` items.
    ///
    /// An empty list means the feed had nothing (or was unparseable), which
    /// is not an error.
    pub async fn fetch_items(
        &self,
        url: &str,
        max_items: usize,
    ) -> Result<Vec<FeedItem>, FeedFetchError> {
        let raw = self.fetcher.fetch(url).await?;
        let items = feed::normalize(&raw, max_items);
        tracing::debug!("normalized {} feed items from {}", items.len(), url);
        Ok(items)
    }

    /// The raw upstream document, untouched.
    pub async fn fetch_raw(&self, url: &str) -> Result<String, FeedFetchError> {
        self.fetcher.fetch(url).await
    }
}
