//! Page entities
//!
//! Display-state wrapper for the two feed sections, plus the static page
//! content (presenter roster, social links).

use serde::Serialize;

/// Display state of one feed-backed page section.
///
/// `Ready(vec![])` means the upstream had nothing — a valid outcome the page
/// renders as "no items", distinct from `Failed`, which renders the static
/// fallback for that section. A failure in one section never touches the
/// other.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum Section<T> {
    /// Fetch still in flight (or its result was suppressed at teardown).
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> Section<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Section::Loading)
    }

    /// Items when the section resolved, regardless of emptiness.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Section::Ready(items) => Some(items),
            _ => None,
        }
    }
}

/// A show presenter shown in the bio grid.
#[derive(Debug, Clone, Serialize)]
pub struct Presenter {
    pub name: &'static str,
    pub bio: &'static str,
    pub photo: &'static str,
    pub linkedin: &'static str,
}

/// A footer social link.
#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}
