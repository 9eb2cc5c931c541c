//! podhome API Server
//!
//! Backend for a podcast landing page: proxies and normalizes the show's
//! Substack feed, lists the channel's recent YouTube videos, and serves the
//! assembled page view. Uses hexagonal (ports & adapters) architecture for
//! clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{FeedFetcherImpl, YouTubeClientImpl};
use app::{ArticleService, PageService, VideoService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub video_service: Arc<VideoService<YouTubeClientImpl>>,
    pub article_service: Arc<ArticleService<FeedFetcherImpl>>,
    pub page_service: Arc<PageService<YouTubeClientImpl, FeedFetcherImpl>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,podhome_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting podhome API...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let youtube = Arc::new(YouTubeClientImpl::new(config.youtube_api_key.clone()));
    let fetcher = Arc::new(FeedFetcherImpl::new());

    // Create application services
    let video_service = Arc::new(VideoService::new(
        youtube.clone(),
        config.youtube_channel_id.clone(),
        config.youtube_channel_handle.clone(),
        config.youtube_max_results,
    ));

    let article_service = Arc::new(ArticleService::new(fetcher.clone()));

    let page_service = Arc::new(PageService::new(
        video_service.clone(),
        article_service.clone(),
        config.feed_url.clone(),
        config.feed_max_items,
    ));

    // Create app state
    let state = AppState {
        video_service,
        article_service,
        page_service,
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // The proxy makes an outbound call per request, so it is rate limited
    let rate_limited_routes = Router::new()
        .route(
            "/api/substack",
            get(handlers::proxy_feed).options(handlers::preflight),
        )
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health))
        // Pipeline endpoints
        .route("/api/videos", get(handlers::list_videos))
        .route("/api/page", get(handlers::get_page))
        // Merge rate-limited routes
        .merge(rate_limited_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
