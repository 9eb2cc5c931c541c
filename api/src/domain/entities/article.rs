//! Article entity
//!
//! One normalized syndication-feed entry, however the upstream chose to
//! publish it (RSS 2.0 or Atom).

use serde::{Deserialize, Serialize};

/// A normalized feed entry.
///
/// `title` is never empty: entries whose title is blank after trimming and
/// CDATA-marker removal are discarded during normalization. `link` falls back
/// to the `"#"` sentinel and `thumbnail` to the empty string when the feed
/// carries neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub thumbnail: String,
}
