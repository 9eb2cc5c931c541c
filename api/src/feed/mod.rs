//! Feed normalization
//!
//! Turns a raw RSS 2.0 / Atom document into a uniform, capped list of
//! [`FeedItem`]s. Two backends implement the same extraction contract behind
//! [`FeedEntry`]: [`tree`] walks a parsed XML tree, [`pattern`] block-matches
//! the raw text for documents no XML parser accepts. The tree backend is
//! authoritative; the pattern backend matches it on well-formed input.
//!
//! Normalization never fails: a structurally broken document yields an empty
//! list, which callers must treat as "feed had nothing", not as an error.

pub mod pattern;
pub mod tree;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::entities::FeedItem;

/// Which syndication schema an extraction pass targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Rss,
    Atom,
}

impl Schema {
    /// Element name wrapping one entry in this schema.
    fn entry_tag(self) -> &'static str {
        match self {
            Schema::Rss => "item",
            Schema::Atom => "entry",
        }
    }
}

/// One located feed entry, abstracted over how it was found.
///
/// Tags are qualified names as they appear in feeds (`media:content`); each
/// backend decides how to match them. Tags are tried in order and the first
/// one yielding a non-empty value wins.
pub trait FeedEntry {
    /// Text content of the first element matching a tag, skipping empty ones.
    fn text(&self, tags: &[&str]) -> Option<String>;

    /// Value of `attr` on the first matching element that carries it
    /// non-empty.
    fn attr(&self, tags: &[&str], attr: &str) -> Option<String>;
}

/// Normalize a raw feed document into at most `max_items` items.
pub fn normalize(raw: &str, max_items: usize) -> Vec<FeedItem> {
    match tree::extract(raw, max_items) {
        Some(items) => items,
        // No XML parse succeeded; re-run the extraction as pattern matches
        // over the raw text.
        None => pattern::extract(raw, max_items),
    }
}

/// Shared driver: an RSS pass first, the Atom pass only when RSS kept
/// nothing.
pub(crate) fn run_extraction<E, F>(entries_for: F, max_items: usize) -> Vec<FeedItem>
where
    E: FeedEntry,
    F: Fn(Schema) -> Vec<E>,
{
    let items = collect(Schema::Rss, &entries_for(Schema::Rss), max_items);
    if !items.is_empty() {
        return items;
    }
    collect(Schema::Atom, &entries_for(Schema::Atom), max_items)
}

/// Apply the field-extraction rules to each entry in document order, keeping
/// at most `max_items`. Entries discarded for a blank title do not count
/// against the cap.
fn collect<E: FeedEntry>(schema: Schema, entries: &[E], max_items: usize) -> Vec<FeedItem> {
    let mut items = Vec::new();

    for entry in entries {
        if items.len() == max_items {
            break;
        }

        // Title presence is the sole inclusion gate; a missing link or
        // thumbnail never excludes an entry.
        let title = clean_text(&entry.text(&["title"]).unwrap_or_default());
        if title.is_empty() {
            continue;
        }

        let (link, thumbnail) = match schema {
            Schema::Rss => {
                let link = entry
                    .text(&["link", "guid"])
                    .map(|raw| clean_text(&raw))
                    .filter(|link| !link.is_empty())
                    .unwrap_or_else(|| "#".to_string());
                // An enclosure wins over media:*, which wins over an image
                // embedded in the entry body.
                let thumbnail = entry
                    .attr(&["enclosure"], "url")
                    .or_else(|| entry.attr(&["media:content", "media:thumbnail"], "url"))
                    .or_else(|| {
                        entry
                            .text(&["content:encoded", "description"])
                            .and_then(|html| first_img_src(&html))
                    });
                (link, thumbnail)
            }
            Schema::Atom => {
                let link = entry
                    .attr(&["link"], "href")
                    .map(|href| href.trim().to_string())
                    .filter(|link| !link.is_empty())
                    .unwrap_or_else(|| "#".to_string());
                let thumbnail = entry
                    .text(&["content", "summary"])
                    .and_then(|html| first_img_src(&html));
                (link, thumbnail)
            }
        };

        items.push(FeedItem {
            title,
            link,
            thumbnail: absolutize(thumbnail),
        });
    }

    items
}

static IMG_SRC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<img[^>]+src=["']([^"']+)["']"#).expect("valid img pattern"));

/// First `<img src>` URL in an HTML fragment, located by pattern match
/// rather than a full HTML parse.
fn first_img_src(html: &str) -> Option<String> {
    IMG_SRC
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Strip CDATA wrapper markers and surrounding whitespace.
fn clean_text(raw: &str) -> String {
    raw.replace("<![CDATA[", "")
        .replace("]]>", "")
        .trim()
        .to_string()
}

/// Empty string when absent; a protocol-relative URL gains an `https:`
/// scheme.
fn absolutize(url: Option<String>) -> String {
    match url {
        Some(url) if url.starts_with("//") => format!("https:{url}"),
        Some(url) => url,
        None => String::new(),
    }
}
