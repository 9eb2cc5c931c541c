//! Unified error types for the podhome API
//!
//! This module defines error types for each layer:
//! - `FeedFetchError`: upstream feed transport errors
//! - `YouTubeError`: YouTube Data API client errors
//! - `AppError`: application layer errors (wraps the above for HTTP responses)
//!
//! Parse failures are deliberately absent: feed normalization degrades to an
//! empty item list instead of erroring.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Upstream feed transport errors
#[derive(Debug, Error)]
pub enum FeedFetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream {status}")]
    Upstream { status: u16 },
}

/// YouTube Data API client errors
#[derive(Debug, Error)]
pub enum YouTubeError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("no channel found for handle {0}")]
    ChannelNotFound(String),

    #[error("neither a channel id nor a channel handle is configured")]
    NotConfigured,

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request: {0}")]
    BadRequest(String),

    #[error("feed error: {0}")]
    Feed(#[from] FeedFetchError),

    #[error("YouTube error: {0}")]
    YouTube(#[from] YouTubeError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Feed(FeedFetchError::Upstream { status }) => {
                // Surface the upstream's own status; an unmappable one
                // becomes a bad gateway.
                let http_status =
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
                return (
                    http_status,
                    Json(ErrorResponse {
                        error: format!("Upstream {status}"),
                        details: None,
                    }),
                )
                    .into_response();
            }
            AppError::Feed(FeedFetchError::Request(e)) => {
                tracing::error!("feed fetch failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch upstream feed",
                    None,
                )
            }
            AppError::YouTube(e) => {
                tracing::error!("YouTube error: {}", e);
                match e {
                    YouTubeError::ChannelNotFound(handle) => (
                        StatusCode::BAD_GATEWAY,
                        "Channel lookup failed",
                        Some(handle.clone()),
                    ),
                    YouTubeError::Api { message, .. } => (
                        StatusCode::BAD_GATEWAY,
                        "YouTube API error",
                        Some(message.clone()),
                    ),
                    YouTubeError::NotConfigured => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Video pipeline not configured",
                        None,
                    ),
                    _ => (StatusCode::BAD_GATEWAY, "YouTube API error", None),
                }
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
