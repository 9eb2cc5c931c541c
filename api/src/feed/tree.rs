//! Structured extraction backend
//!
//! Parses the document with roxmltree and walks the element tree. This is
//! the authoritative backend: it only reports failure when no parse
//! succeeds, so an accepted document without entries is an empty list, not a
//! reason to fall back.

use roxmltree::{Document, Node, ParsingOptions};

use super::{run_extraction, FeedEntry, Schema};
use crate::domain::entities::FeedItem;

/// Extract items from a parsed tree; `None` when the text is not XML at all.
pub(crate) fn extract(raw: &str, max_items: usize) -> Option<Vec<FeedItem>> {
    let doc = parse_document(raw)?;
    Some(run_extraction(|schema| entries(&doc, schema), max_items))
}

/// Strict parse first, then a retry tolerating the DTDs some feeds still
/// ship.
fn parse_document(raw: &str) -> Option<Document<'_>> {
    if let Ok(doc) = Document::parse(raw) {
        return Some(doc);
    }
    let opts = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(raw, opts).ok()
}

fn entries<'a, 'input>(doc: &'a Document<'input>, schema: Schema) -> Vec<TreeEntry<'a, 'input>> {
    doc.descendants()
        .filter(|node| node.is_element() && matches_tag(node, schema.entry_tag()))
        .map(TreeEntry)
        .collect()
}

/// One `item`/`entry` element.
pub(crate) struct TreeEntry<'a, 'input>(Node<'a, 'input>);

impl FeedEntry for TreeEntry<'_, '_> {
    fn text(&self, tags: &[&str]) -> Option<String> {
        tags.iter().find_map(|tag| {
            let child = self
                .0
                .children()
                .find(|child| child.is_element() && matches_tag(child, tag))?;
            let text = element_text(child);
            (!text.is_empty()).then_some(text)
        })
    }

    fn attr(&self, tags: &[&str], attr: &str) -> Option<String> {
        tags.iter().find_map(|tag| {
            self.0
                .children()
                .filter(|child| child.is_element() && matches_tag(child, tag))
                .find_map(|child| {
                    child
                        .attribute(attr)
                        .filter(|value| !value.is_empty())
                        .map(str::to_string)
                })
        })
    }
}

/// The tree resolves namespaces, so a qualified tag like `media:content`
/// matches on its local part.
fn matches_tag(node: &Node<'_, '_>, tag: &str) -> bool {
    let local = tag.rsplit(':').next().unwrap_or(tag);
    node.tag_name().name().eq_ignore_ascii_case(local)
}

/// Concatenated text of an element's direct text and CDATA children.
fn element_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}
