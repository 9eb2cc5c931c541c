//! Video listing handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::entities::VideoItem;
use crate::error::AppError;
use crate::AppState;

/// JSON response for the episode carousel
#[derive(Serialize)]
pub struct VideosResponse {
    /// Newest video id, for the hero embed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
    pub videos: Vec<VideoItem>,
}

/// GET /api/videos
pub async fn list_videos(State(state): State<AppState>) -> Result<Json<VideosResponse>, AppError> {
    let videos = state.video_service.latest_videos().await?;

    Ok(Json(VideosResponse {
        latest: videos.first().map(|video| video.id.clone()),
        videos,
    }))
}
