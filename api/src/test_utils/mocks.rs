//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured per test and record the
//! calls they receive.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::entities::VideoItem;
use crate::domain::ports::{FeedFetcher, VideoApi};
use crate::error::{FeedFetchError, YouTubeError};

// ============================================================================
// Mock YouTube client
// ============================================================================

#[derive(Default)]
pub struct MockVideoApi {
    channel_id: Option<String>,
    videos: Vec<VideoItem>,
    fail_search: bool,
    resolve_calls: AtomicUsize,
    last_channel: Mutex<Option<String>>,
    last_max: Mutex<Option<u8>>,
}

impl MockVideoApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canned result for handle resolution; without it, resolution fails.
    pub fn with_channel(mut self, channel_id: &str) -> Self {
        self.channel_id = Some(channel_id.to_string());
        self
    }

    pub fn with_videos(mut self, videos: Vec<VideoItem>) -> Self {
        self.videos = videos;
        self
    }

    /// Make every search fail with an upstream API error.
    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    pub fn last_channel(&self) -> Option<String> {
        self.last_channel.lock().unwrap().clone()
    }

    pub fn last_max(&self) -> Option<u8> {
        *self.last_max.lock().unwrap()
    }
}

#[async_trait]
impl VideoApi for MockVideoApi {
    async fn resolve_channel(&self, handle: &str) -> Result<String, YouTubeError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        self.channel_id
            .clone()
            .ok_or_else(|| YouTubeError::ChannelNotFound(handle.to_string()))
    }

    async fn recent_videos(
        &self,
        channel_id: &str,
        max: u8,
    ) -> Result<Vec<VideoItem>, YouTubeError> {
        *self.last_channel.lock().unwrap() = Some(channel_id.to_string());
        *self.last_max.lock().unwrap() = Some(max);

        if self.fail_search {
            return Err(YouTubeError::Api {
                status: 500,
                message: "search exploded".to_string(),
            });
        }

        Ok(self
            .videos
            .iter()
            .take(max as usize)
            .cloned()
            .collect())
    }
}

// ============================================================================
// Mock feed fetcher
// ============================================================================

#[derive(Default)]
pub struct MockFeedFetcher {
    body: Option<String>,
    status: Option<u16>,
    requests: Mutex<Vec<String>>,
}

impl MockFeedFetcher {
    /// Always answer with this document.
    pub fn with_body(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            ..Self::default()
        }
    }

    /// Always answer with this non-success upstream status.
    pub fn with_status(status: u16) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// URLs fetched so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedFetcher for MockFeedFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FeedFetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        if let Some(status) = self.status {
            return Err(FeedFetchError::Upstream { status });
        }
        Ok(self.body.clone().unwrap_or_default())
    }
}
