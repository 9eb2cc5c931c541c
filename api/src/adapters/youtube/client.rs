//! YouTube Data API client implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::VideoItem;
use crate::domain::ports::VideoApi;
use crate::error::YouTubeError;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Upstream hard cap on search page size.
const MAX_PAGE_SIZE: u8 = 50;

/// Implementation of the [`VideoApi`] port against the YouTube Data API v3.
pub struct YouTubeClientImpl {
    http: Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClientImpl {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), api_key)
    }

    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, YouTubeError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| YouTubeError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(YouTubeError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Response types from the YouTube Data API
#[derive(Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<ChannelResource>,
}

#[derive(Deserialize)]
struct ChannelResource {
    id: String,
}

#[derive(Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchResource>,
}

#[derive(Deserialize)]
struct SearchResource {
    id: SearchResourceId,
    snippet: Option<SearchSnippet>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResourceId {
    video_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSnippet {
    title: String,
    published_at: DateTime<Utc>,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Deserialize, Default)]
struct Thumbnails {
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
}

#[derive(Deserialize)]
struct Thumbnail {
    url: String,
}

/// Map raw search results into display items. Anything without a video
/// identifier (channel and playlist hits, mostly) is dropped.
fn map_search_items(items: Vec<SearchResource>) -> Vec<VideoItem> {
    items
        .into_iter()
        .filter_map(|resource| {
            let id = resource.id.video_id.filter(|id| !id.is_empty())?;
            let snippet = resource.snippet?;
            Some(VideoItem {
                id,
                title: snippet.title,
                published_at: snippet.published_at,
                thumbnail: snippet
                    .thumbnails
                    .high
                    .or(snippet.thumbnails.medium)
                    .map(|thumb| thumb.url),
            })
        })
        .collect()
}

/// Ensure the `@` prefix the channel-lookup endpoint expects.
fn at_handle(handle: &str) -> String {
    if handle.starts_with('@') {
        handle.to_string()
    } else {
        format!("@{handle}")
    }
}

#[async_trait]
impl VideoApi for YouTubeClientImpl {
    async fn resolve_channel(&self, handle: &str) -> Result<String, YouTubeError> {
        let handle = at_handle(handle);
        let response = self
            .http
            .get(format!("{}/channels", self.base_url))
            .query(&[
                ("part", "id"),
                ("forHandle", handle.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let channels: ChannelListResponse = self.handle_response(response).await?;
        channels
            .items
            .into_iter()
            .next()
            .map(|channel| channel.id)
            .filter(|id| !id.is_empty())
            .ok_or(YouTubeError::ChannelNotFound(handle))
    }

    async fn recent_videos(
        &self,
        channel_id: &str,
        max: u8,
    ) -> Result<Vec<VideoItem>, YouTubeError> {
        let page_size = max.min(MAX_PAGE_SIZE).to_string();
        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("channelId", channel_id),
                ("order", "date"),
                ("type", "video"),
                ("maxResults", page_size.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let results: SearchListResponse = self.handle_response(response).await?;
        Ok(map_search_items(results.items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_without_video_id_are_dropped() {
        let payload = serde_json::json!({
            "items": [
                {
                    "id": {"kind": "youtube#video", "videoId": "vid-1"},
                    "snippet": {
                        "title": "Episode 1",
                        "publishedAt": "2024-03-01T10:00:00Z",
                        "thumbnails": {
                            "high": {"url": "http://img/high1.jpg"},
                            "medium": {"url": "http://img/med1.jpg"}
                        }
                    }
                },
                {
                    "id": {"kind": "youtube#channel", "channelId": "UC123"},
                    "snippet": {
                        "title": "The channel itself",
                        "publishedAt": "2024-01-01T00:00:00Z"
                    }
                },
                {
                    "id": {"kind": "youtube#video", "videoId": "vid-2"},
                    "snippet": {
                        "title": "Episode 2",
                        "publishedAt": "2024-02-01T00:00:00Z",
                        "thumbnails": {"medium": {"url": "http://img/med2.jpg"}}
                    }
                }
            ]
        });

        let response: SearchListResponse = serde_json::from_value(payload).unwrap();
        let videos = map_search_items(response.items);

        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].id, "vid-1");
        assert_eq!(videos[1].id, "vid-2");
    }

    #[test]
    fn thumbnail_prefers_high_over_medium() {
        let payload = serde_json::json!({
            "items": [
                {
                    "id": {"videoId": "a"},
                    "snippet": {
                        "title": "t",
                        "publishedAt": "2024-03-01T10:00:00Z",
                        "thumbnails": {
                            "high": {"url": "http://img/high.jpg"},
                            "medium": {"url": "http://img/med.jpg"}
                        }
                    }
                },
                {
                    "id": {"videoId": "b"},
                    "snippet": {
                        "title": "t",
                        "publishedAt": "2024-03-01T10:00:00Z",
                        "thumbnails": {"medium": {"url": "http://img/med-only.jpg"}}
                    }
                },
                {
                    "id": {"videoId": "c"},
                    "snippet": {"title": "t", "publishedAt": "2024-03-01T10:00:00Z"}
                }
            ]
        });

        let response: SearchListResponse = serde_json::from_value(payload).unwrap();
        let videos = map_search_items(response.items);

        assert_eq!(videos[0].thumbnail.as_deref(), Some("http://img/high.jpg"));
        assert_eq!(
            videos[1].thumbnail.as_deref(),
            Some("http://img/med-only.jpg")
        );
        assert_eq!(videos[2].thumbnail, None);
    }

    #[test]
    fn handles_gain_an_at_prefix_once() {
        assert_eq!(at_handle("mychannel"), "@mychannel");
        assert_eq!(at_handle("@mychannel"), "@mychannel");
    }

    #[test]
    fn empty_channel_list_deserializes() {
        let response: ChannelListResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(response.items.is_empty());
    }
}
