//! Video entity
//!
//! A channel video as the landing page shows it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One video from the channel's recent uploads.
///
/// `id` is always non-empty: search results without a video identifier are
/// filtered out during mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl VideoItem {
    /// Canonical watch URL for this video.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}
