//! Video service
//!
//! Lists a channel's recent uploads. A directly configured channel id skips
//! the handle-lookup round trip entirely.

use std::sync::Arc;

use crate::domain::entities::VideoItem;
use crate::domain::ports::VideoApi;
use crate::error::YouTubeError;

/// Upstream caps search results at 50 per page; so do we.
const MAX_RESULTS: u8 = 50;

/// Service producing the episode carousel's videos.
pub struct VideoService<V>
where
    V: VideoApi,
{
    api: Arc<V>,
    channel_id: Option<String>,
    channel_handle: String,
    max_results: u8,
}

impl<V> VideoService<V>
where
    V: VideoApi,
{
    pub fn new(
        api: Arc<V>,
        channel_id: Option<String>,
        channel_handle: String,
        max_results: u8,
    ) -> Self {
        Self {
            api,
            channel_id,
            channel_handle,
            max_results,
        }
    }

    /// The channel's recent videos, newest first.
    pub async fn latest_videos(&self) -> Result<Vec<VideoItem>, YouTubeError> {
        let channel_id = match self.channel_id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None if self.channel_handle.is_empty() => {
                return Err(YouTubeError::NotConfigured);
            }
            None => self.api.resolve_channel(&self.channel_handle).await?,
        };

        self.api
            .recent_videos(&channel_id, self.max_results.min(MAX_RESULTS))
            .await
    }
}
