//! Best-effort metadata extraction.
//!
//! Runs on the full document before pruning, since the sources it reads
//! (meta tags, the html element, byline markup) are exactly what pruning
//! removes. Every field is optional and every failure is absorbed: a page
//! with no usable metadata still extracts, the fields just stay unset.

use dom_query::{Document, Selection};

use crate::patterns::DATE_TEXT;

/// Metadata gathered from a document. All fields best-effort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub author: Option<String>,
    pub date: Option<String>,
    pub language: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Extract all metadata fields from an unpruned document.
#[must_use]
pub fn extract_metadata(doc: &Document) -> DocumentMetadata {
    DocumentMetadata {
        author: extract_author(doc),
        date: extract_date(doc),
        language: extract_language(doc),
        description: extract_description(doc),
        tags: extract_tags(doc),
    }
}

/// Author: meta tags first, then byline markup.
fn extract_author(doc: &Document) -> Option<String> {
    meta_content(doc, r#"meta[name="author"]"#)
        .or_else(|| meta_content(doc, r#"meta[property="article:author"]"#))
        .or_else(|| {
            first_text(doc, r#"[rel="author"], .author, .byline"#).map(strip_byline_prefix)
        })
        .filter(|author| !author.is_empty())
}

/// Publication date: structured sources first, then date-shaped text.
fn extract_date(doc: &Document) -> Option<String> {
    if let Some(published) = meta_content(doc, r#"meta[property="article:published_time"]"#) {
        return Some(normalize_date(&published));
    }

    if let Some(node) = doc.select("time[datetime]").nodes().first() {
        if let Some(datetime) = Selection::from(*node).attr("datetime") {
            let datetime = datetime.trim();
            if !datetime.is_empty() {
                return Some(normalize_date(datetime));
            }
        }
    }

    first_text(doc, r#"[class*="date"]"#)
        .and_then(|text| DATE_TEXT.find(&text).map(|m| m.as_str().to_string()))
}

/// Language: the html element's lang attribute, then the meta declaration.
fn extract_language(doc: &Document) -> Option<String> {
    let from_html = doc
        .select("html")
        .nodes()
        .first()
        .and_then(|node| Selection::from(*node).attr("lang"))
        .map(|lang| lang.trim().to_string())
        .filter(|lang| !lang.is_empty());

    from_html.or_else(|| meta_content(doc, r#"meta[http-equiv="content-language"]"#))
}

fn extract_description(doc: &Document) -> Option<String> {
    meta_content(doc, r#"meta[name="description"]"#)
        .or_else(|| meta_content(doc, r#"meta[property="og:description"]"#))
}

/// Tags: repeatable article:tag metas, falling back to comma-separated
/// keywords. Document order is preserved.
fn extract_tags(doc: &Document) -> Option<Vec<String>> {
    let mut tags: Vec<String> = Vec::new();

    for node in doc.select(r#"meta[property="article:tag"]"#).nodes() {
        if let Some(content) = Selection::from(*node).attr("content") {
            let tag = content.trim();
            if !tag.is_empty() {
                tags.push(tag.to_string());
            }
        }
    }

    if tags.is_empty() {
        if let Some(keywords) = meta_content(doc, r#"meta[name="keywords"]"#) {
            tags = keywords
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(ToString::to_string)
                .collect();
        }
    }

    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

/// Content attribute of the first element matching `selector`.
fn meta_content(doc: &Document, selector: &str) -> Option<String> {
    doc.select(selector)
        .nodes()
        .first()
        .and_then(|node| Selection::from(*node).attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

/// Trimmed text of the first element matching `selector`.
fn first_text(doc: &Document, selector: &str) -> Option<String> {
    doc.select(selector)
        .nodes()
        .first()
        .map(|node| Selection::from(*node).text().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Strip a leading "By " from byline text.
fn strip_byline_prefix(text: String) -> String {
    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();
    for prefix in ["by ", "by:"] {
        if lower.starts_with(prefix) {
            return trimmed[prefix.len()..].trim().to_string();
        }
    }
    trimmed.to_string()
}

/// Reduce structured timestamps to a calendar date where they parse;
/// anything unparseable is kept verbatim rather than discarded.
fn normalize_date(raw: &str) -> String {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return parsed.date_naive().to_string();
    }
    if let Ok(parsed) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.to_string();
    }
    raw.to_string()
}
