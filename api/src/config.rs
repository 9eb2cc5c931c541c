use std::env;

#[derive(Clone)]
pub struct Config {
    /// YouTube Data API key.
    pub youtube_api_key: String,
    /// Direct channel id; when set, the handle is never resolved.
    pub youtube_channel_id: Option<String>,
    pub youtube_channel_handle: String,
    pub youtube_max_results: u8,
    /// Substack feed behind the articles section; absent renders it empty.
    pub feed_url: Option<String>,
    pub feed_max_items: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            youtube_api_key: env::var("YOUTUBE_API_KEY").expect("YOUTUBE_API_KEY must be set"),
            youtube_channel_id: env::var("YOUTUBE_CHANNEL_ID")
                .ok()
                .filter(|id| !id.is_empty()),
            youtube_channel_handle: env::var("YOUTUBE_CHANNEL_HANDLE").unwrap_or_default(),
            youtube_max_results: parse_or("YOUTUBE_MAX_RESULTS", 24),
            feed_url: env::var("SUBSTACK_FEED_URL").ok().filter(|url| !url.is_empty()),
            feed_max_items: parse_or("SUBSTACK_MAX_ITEMS", 12),
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
