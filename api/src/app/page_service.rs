//! Page service
//!
//! Assembles the landing-page view: static hero/presenter/social content
//! plus the two feed-backed sections. The two fetches run concurrently with
//! no ordering dependency; each folds into its own section of the view, so a
//! failure on one side never touches the other.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{FeedItem, Presenter, Section, SocialLink, VideoItem};
use crate::domain::ports::{FeedFetcher, VideoApi};

use super::{ArticleService, VideoService};

/// Teardown guard for in-flight loads.
///
/// The consumer sets it once when it goes away; each load checks it at
/// completion, before applying its result. The underlying request is never
/// aborted — only its effect on the view is suppressed, leaving that section
/// in `Loading`.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// The complete landing-page view.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub hero: Hero,
    pub presenters: Vec<Presenter>,
    pub socials: Vec<SocialLink>,
    pub contact_email: &'static str,
    /// Newest video id, embedded above the episode carousel.
    pub latest_episode: Option<String>,
    pub episodes: Section<VideoItem>,
    pub articles: Section<FeedItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub tagline: &'static str,
}

const HERO: Hero = Hero {
    title: "Conversations worth your commute.",
    tagline: "A show about market intelligence, invention and innovation — \
              concepts, tools, case studies and the occasional laugh.",
};

const CONTACT_EMAIL: &str = "hello@podhome.studio";

fn presenters() -> Vec<Presenter> {
    vec![
        Presenter {
            name: "Pat Mercer",
            bio: "Professor and researcher focused on digital transformation.",
            photo: "/presenters/pat.jpeg",
            linkedin: "https://www.linkedin.com/in/patmercer/",
        },
        Presenter {
            name: "Gio Latta",
            bio: "Market and technology strategist, co-host of the show.",
            photo: "/presenters/gio.jpeg",
            linkedin: "https://www.linkedin.com/in/giolatta/",
        },
    ]
}

fn socials() -> Vec<SocialLink> {
    vec![
        SocialLink {
            name: "LinkedIn",
            href: "https://www.linkedin.com/company/podhome/",
        },
        SocialLink {
            name: "Instagram",
            href: "https://www.instagram.com/podhome.show/",
        },
        SocialLink {
            name: "Spotify",
            href: "https://open.spotify.com/show/podhome",
        },
        SocialLink {
            name: "YouTube",
            href: "https://www.youtube.com/@podhome",
        },
        SocialLink {
            name: "Substack",
            href: "https://podhome.substack.com/",
        },
    ]
}

impl PageView {
    /// Statics filled in, both sections still loading.
    fn loading() -> Self {
        Self {
            hero: HERO,
            presenters: presenters(),
            socials: socials(),
            contact_email: CONTACT_EMAIL,
            latest_episode: None,
            episodes: Section::Loading,
            articles: Section::Loading,
        }
    }
}

/// Service assembling the page view from both pipelines.
pub struct PageService<V, F>
where
    V: VideoApi,
    F: FeedFetcher,
{
    videos: Arc<VideoService<V>>,
    articles: Arc<ArticleService<F>>,
    feed_url: Option<String>,
    feed_max_items: usize,
}

impl<V, F> PageService<V, F>
where
    V: VideoApi,
    F: FeedFetcher,
{
    pub fn new(
        videos: Arc<VideoService<V>>,
        articles: Arc<ArticleService<F>>,
        feed_url: Option<String>,
        feed_max_items: usize,
    ) -> Self {
        Self {
            videos,
            articles,
            feed_url,
            feed_max_items,
        }
    }

    /// Load both sections concurrently.
    ///
    /// Each pipeline's result is applied only if `cancel` is still unset at
    /// the moment that pipeline resolves; a suppressed section stays
    /// `Loading`. No retries: a failed upstream call surfaces immediately as
    /// that section's `Failed` state.
    pub async fn load(&self, cancel: &CancelToken) -> PageView {
        let episodes = async {
            let section = match self.videos.latest_videos().await {
                Ok(videos) => Section::Ready(videos),
                Err(e) => {
                    tracing::warn!("video pipeline failed: {}", e);
                    Section::Failed(e.to_string())
                }
            };
            (!cancel.is_cancelled()).then_some(section)
        };

        let articles = async {
            let section = match &self.feed_url {
                // No feed configured: a resolved, empty section.
                None => Section::Ready(Vec::new()),
                Some(url) => match self.articles.fetch_items(url, self.feed_max_items).await {
                    Ok(items) => Section::Ready(items),
                    Err(e) => {
                        tracing::warn!("article pipeline failed: {}", e);
                        Section::Failed(e.to_string())
                    }
                },
            };
            (!cancel.is_cancelled()).then_some(section)
        };

        let (episodes, articles) = tokio::join!(episodes, articles);

        let mut view = PageView::loading();
        if let Some(section) = episodes {
            if let Section::Ready(videos) = &section {
                view.latest_episode = videos.first().map(|video| video.id.clone());
            }
            view.episodes = section;
        }
        if let Some(section) = articles {
            view.articles = section;
        }
        view
    }
}
