//! Upstream feed transport port
//!
//! The feed pipeline never talks HTTP directly; it goes through this seam so
//! tests can substitute canned documents.

use async_trait::async_trait;

use crate::error::FeedFetchError;

/// Fetches a raw syndication document from an upstream host.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch the document at `url` as text.
    ///
    /// A non-success upstream status is an error carrying that status; the
    /// caller proxies it instead of crashing. No retries.
    async fn fetch(&self, url: &str) -> Result<String, FeedFetchError>;
}
