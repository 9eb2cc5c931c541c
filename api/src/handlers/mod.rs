//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod page;
pub mod substack;
pub mod videos;

pub use page::get_page;
pub use substack::{preflight, proxy_feed};
pub use videos::list_videos;
