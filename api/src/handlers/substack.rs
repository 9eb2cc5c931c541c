//! Substack feed proxy handlers
//!
//! The landing page cannot fetch the feed cross-origin, so this endpoint
//! fetches it server-side and returns either the raw document or the
//! normalized items — the caller picks per request via `format`.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::FeedItem;
use crate::error::AppError;
use crate::AppState;

const DEFAULT_MAX_ITEMS: usize = 12;
const MAX_ITEMS_CAP: usize = 50;

/// Short public cache; feeds move slowly.
const CACHE_CONTROL: &str = "s-maxage=300, stale-while-revalidate=600";

/// Query params for the proxy
#[derive(Debug, Deserialize)]
pub struct ProxyParams {
    pub url: Option<String>,
    pub max: Option<usize>,
    #[serde(default)]
    pub format: ProxyFormat,
}

/// The proxy's two response variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyFormat {
    /// Normalized JSON items.
    #[default]
    Items,
    /// The upstream document as-is.
    Raw,
}

/// JSON body of the normalized variant
#[derive(Serialize)]
pub struct ItemsResponse {
    pub items: Vec<FeedItem>,
}

/// GET /api/substack
///
/// Upstream non-success statuses are proxied through as-is; fetch failures
/// become a generic 500. Neither crashes the process.
pub async fn proxy_feed(
    State(state): State<AppState>,
    Query(params): Query<ProxyParams>,
) -> Result<Response, AppError> {
    let url = validate_feed_url(params.url.as_deref())?;
    let max_items = params.max.unwrap_or(DEFAULT_MAX_ITEMS).min(MAX_ITEMS_CAP);

    match params.format {
        ProxyFormat::Raw => {
            let raw = state.article_service.fetch_raw(&url).await?;
            Ok((
                [
                    (header::CONTENT_TYPE, "application/xml; charset=utf-8"),
                    (header::CACHE_CONTROL, CACHE_CONTROL),
                ],
                raw,
            )
                .into_response())
        }
        ProxyFormat::Items => {
            let items = state.article_service.fetch_items(&url, max_items).await?;
            Ok((
                [(header::CACHE_CONTROL, CACHE_CONTROL)],
                Json(ItemsResponse { items }),
            )
                .into_response())
        }
    }
}

/// OPTIONS /api/substack
///
/// Browser preflights carrying CORS headers are answered by the CORS layer;
/// anything else that reaches the route gets an empty 204.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// The target must be an absolute http(s) URL; everything else is rejected
/// before any outbound call is made.
fn validate_feed_url(raw: Option<&str>) -> Result<String, AppError> {
    let raw = raw
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("missing ?url parameter".to_string()))?;

    let parsed = reqwest::Url::parse(raw)
        .map_err(|_| AppError::BadRequest(format!("invalid ?url parameter: {raw}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::BadRequest(format!(
            "unsupported URL scheme: {}",
            parsed.scheme()
        )));
    }

    Ok(parsed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_is_rejected() {
        assert!(matches!(
            validate_feed_url(None),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            validate_feed_url(Some("   ")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn relative_and_garbage_urls_are_rejected() {
        assert!(matches!(
            validate_feed_url(Some("not-a-url")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            validate_feed_url(Some("/feed.xml")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn non_http_schemes_are_rejected() {
        assert!(matches!(
            validate_feed_url(Some("ftp://example.com/feed")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            validate_feed_url(Some("file:///etc/passwd")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn http_and_https_pass() {
        assert_eq!(
            validate_feed_url(Some("https://blog.example.com/feed")).unwrap(),
            "https://blog.example.com/feed"
        );
        assert!(validate_feed_url(Some("http://blog.example.com/feed")).is_ok());
    }

    #[test]
    fn format_defaults_to_items() {
        let params: ProxyParams =
            serde_json::from_value(serde_json::json!({"url": "https://x/feed"})).unwrap();
        assert_eq!(params.format, ProxyFormat::Items);

        let params: ProxyParams =
            serde_json::from_value(serde_json::json!({"url": "https://x/feed", "format": "raw"}))
                .unwrap();
        assert_eq!(params.format, ProxyFormat::Raw);
    }
}
