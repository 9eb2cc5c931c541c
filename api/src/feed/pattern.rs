//! Pattern-match extraction backend
//!
//! Re-runs the shared extraction over raw text with regular expressions:
//! entry spans are block-matched, fields are matched inside each span. It
//! exists for documents no XML parser accepts (and mirrors the extraction a
//! parser-less proxy environment has to do); for well-formed input it
//! produces the same output as the tree backend.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{run_extraction, FeedEntry, Schema};
use crate::domain::entities::FeedItem;

static RSS_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<item[\s>].*?</item>").expect("valid block pattern"));
static ATOM_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<entry[\s>].*?</entry>").expect("valid block pattern"));

/// Extract items by pattern matching alone. Unlike the tree backend this
/// cannot fail; unmatched input is simply an empty list.
pub(crate) fn extract(raw: &str, max_items: usize) -> Vec<FeedItem> {
    run_extraction(
        |schema| {
            let blocks = match schema {
                Schema::Rss => &RSS_ITEM,
                Schema::Atom => &ATOM_ENTRY,
            };
            blocks
                .find_iter(raw)
                .map(|span| SpanEntry(span.as_str()))
                .collect()
        },
        max_items,
    )
}

/// One block-matched `<item>…</item>` / `<entry>…</entry>` span.
pub(crate) struct SpanEntry<'a>(&'a str);

impl FeedEntry for SpanEntry<'_> {
    fn text(&self, tags: &[&str]) -> Option<String> {
        tags.iter().find_map(|tag| {
            let captured = capture(&text_pattern(tag), self.0)?;
            (!captured.is_empty()).then_some(captured)
        })
    }

    fn attr(&self, tags: &[&str], attr: &str) -> Option<String> {
        tags.iter()
            .find_map(|tag| capture(&attr_pattern(tag, attr), self.0))
    }
}

fn capture(pattern: &Regex, haystack: &str) -> Option<String> {
    pattern
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// `<tag …>…</tag>`, any attributes on the opening tag.
fn text_pattern(tag: &str) -> Regex {
    cached(format!(r"(?is)<{0}[^>]*>(.*?)</{0}>", regex::escape(tag)))
}

/// `<tag … attr="…">`, quoted either way; an empty value never matches.
fn attr_pattern(tag: &str, attr: &str) -> Regex {
    cached(format!(
        r#"(?is)<{}[^>]+{}\s*=\s*["']([^"']+)["']"#,
        regex::escape(tag),
        regex::escape(attr)
    ))
}

/// The handful of field patterns are compiled once and reused.
fn cached(pattern: String) -> Regex {
    static CACHE: Lazy<Mutex<HashMap<String, Regex>>> = Lazy::new(|| Mutex::new(HashMap::new()));

    let mut cache = CACHE.lock().expect("pattern cache lock");
    cache
        .entry(pattern)
        .or_insert_with_key(|p| Regex::new(p).expect("valid field pattern"))
        .clone()
}
