//! YouTube Data API port
//!
//! Defines the two upstream operations the video pipeline needs. The API
//! itself is an opaque upstream; adapters own the wire format.

use async_trait::async_trait;

use crate::domain::entities::VideoItem;
use crate::error::YouTubeError;

#[async_trait]
pub trait VideoApi: Send + Sync {
    /// Resolve a channel handle (with or without the `@` prefix) to a
    /// channel identifier. Fails descriptively when the lookup returns
    /// nothing.
    async fn resolve_channel(&self, handle: &str) -> Result<String, YouTubeError>;

    /// Recent videos of a channel, newest first, at most `max` (≤ 50).
    /// Results without a usable video identifier are already dropped.
    async fn recent_videos(&self, channel_id: &str, max: u8)
        -> Result<Vec<VideoItem>, YouTubeError>;
}
