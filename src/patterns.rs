//! Compiled regex patterns and CSS selector lists for the pipeline.
//!
//! All patterns are compiled once at first use via `LazyLock`. Selector
//! lists are ordered: earlier entries are more specific and win first.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Normalization Patterns
// =============================================================================

/// Matches a run of whitespace (including newlines) for collapsing.
pub static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUNS regex"));

/// Matches characters outside the allowed set: word characters, whitespace,
/// CJK ideographs, and the punctuation allow-list `. , ! ? ; : ( ) " ' -`.
pub static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^\w\s\x{4e00}-\x{9fff}.,!?;:()"'-]"#).expect("DISALLOWED_CHARS regex")
});

/// Matches a run of two or more periods.
pub static REPEATED_PERIODS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("REPEATED_PERIODS regex"));

/// Matches a run of two or more exclamation marks.
pub static REPEATED_EXCLAMATIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!{2,}").expect("REPEATED_EXCLAMATIONS regex"));

/// Matches a run of two or more question marks.
pub static REPEATED_QUESTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?{2,}").expect("REPEATED_QUESTIONS regex"));

// =============================================================================
// Metadata Patterns
// =============================================================================

/// Matches date-shaped text in common formats (ISO, slashed, written out).
pub static DATE_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d{4}[-/]\d{1,2}[-/]\d{1,2}|\d{1,2}[-/]\d{1,2}[-/]\d{4}|\w+\s+\d{1,2},?\s+\d{4})",
    )
    .expect("DATE_TEXT regex")
});

// =============================================================================
// Selector Lists (ordered, first acceptable match wins)
// =============================================================================

/// Title candidates in priority order.
pub const TITLE_SELECTORS: &[&str] = &[
    "h1",
    "title",
    r#"[class*="title"]"#,
    r#"[id*="title"]"#,
    "h2",
];

/// Content-region candidates in priority order: article containers first,
/// then content-like class/id markers, then generic containers.
pub const CONTENT_SELECTORS: &[&str] = &[
    "article",
    r#"[class*="content"]"#,
    r#"[class*="article"]"#,
    r#"[class*="post"]"#,
    r#"[id*="content"]"#,
    r#"[id*="article"]"#,
    r#"[id*="post"]"#,
    "main",
    ".entry-content",
    ".post-content",
    ".article-content",
];

/// Paragraph-like elements aggregated by the recall fallback.
pub const PARAGRAPH_SELECTOR: &str = "p, div, span";
