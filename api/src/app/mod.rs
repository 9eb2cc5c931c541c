//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod article_service;
pub mod page_service;
pub mod video_service;

pub use article_service::ArticleService;
pub use page_service::{CancelToken, PageService, PageView};
pub use video_service::VideoService;
