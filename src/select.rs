//! Content-region and title selection.
//!
//! Runs on a pruned document. Candidate selectors are evaluated lazily in
//! priority order and the first good-enough match wins; when no selector
//! yields enough text, a paragraph-aggregation fallback recovers whatever
//! fragments look like prose.

use dom_query::{Document, Selection};
use tendril::StrTendril;

use crate::patterns::{CONTENT_SELECTORS, PARAGRAPH_SELECTOR, TITLE_SELECTORS};

/// Paragraph fragments at or below this trimmed length are ignored by the
/// fallback; shorter runs are usually navigation or button labels.
const MIN_FRAGMENT_LEN: usize = 20;

/// Pick the document title.
///
/// Evaluates the title selectors in priority order (`h1`, the title
/// element, title-like class/id markers, `h2`) and returns the first
/// selector whose first match has non-whitespace text.
#[must_use]
pub fn select_title(doc: &Document) -> Option<String> {
    for selector in TITLE_SELECTORS {
        let matches = doc.select(selector);
        let Some(node) = matches.nodes().first() else {
            continue;
        };
        let text: StrTendril = Selection::from(*node).text();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }
    None
}

/// Pick the article body text.
///
/// For each content selector, the text of all matches is concatenated;
/// the first selector whose text exceeds `min_len` characters wins. The
/// paragraph fallback runs whenever the primary pick is below the
/// threshold, not only when zero selectors match.
///
/// Returns an empty string, never an error, when nothing qualifies.
#[must_use]
pub fn select_body(doc: &Document, min_len: usize) -> String {
    let mut content = String::new();

    for selector in CONTENT_SELECTORS {
        let matches = doc.select(selector);
        if !matches.exists() {
            continue;
        }
        content = concat_text(&matches);
        if content.chars().count() > min_len {
            return content;
        }
    }

    if content.is_empty() || content.chars().count() < min_len {
        content = paragraph_fallback(doc);
    }

    content
}

/// Concatenate the trimmed text of every node in a selection with single
/// spaces.
fn concat_text(matches: &Selection) -> String {
    let parts: Vec<String> = matches
        .nodes()
        .iter()
        .map(|node| Selection::from(*node).text().trim().to_string())
        .collect();
    parts.join(" ").trim().to_string()
}

/// Aggregate prose from paragraph-like elements (`p`, `div`, `span`),
/// keeping only fragments longer than [`MIN_FRAGMENT_LEN`] characters.
fn paragraph_fallback(doc: &Document) -> String {
    let mut parts = Vec::new();

    for node in doc.select(PARAGRAPH_SELECTOR).nodes() {
        let text: StrTendril = Selection::from(*node).text();
        let trimmed = text.trim();
        if trimmed.chars().count() > MIN_FRAGMENT_LEN {
            parts.push(trimmed.to_string());
        }
    }

    parts.join(" ")
}
