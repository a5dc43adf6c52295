//! Configuration for the extraction pipeline.
//!
//! [`ExtractionConfig`] carries the recognized per-pipeline options; it is
//! constructed once, never mutated afterwards, and shared read-only across
//! all batch workers. [`PruneRules`] carries the hand-tuned boilerplate
//! heuristics as an injected set so callers can swap them without touching
//! the pruner.

use std::time::Duration;

/// Default User-Agent, matching a desktop Chrome browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Tags removed wholesale during structural pruning.
pub const REMOVE_TAGS: &[&str] = &[
    "script", "style", "nav", "header", "footer", "aside", "form", "input",
    "button", "iframe", "embed", "object", "video", "audio", "canvas", "svg",
    "noscript", "meta", "link", "title", "head",
];

/// Case-insensitive substrings matched against `class`/`id` attributes;
/// any element whose class or id contains one of these is removed.
pub const REMOVE_PATTERNS: &[&str] = &[
    "ad", "ads", "advertisement", "banner", "sidebar", "menu", "navigation",
    "nav", "footer", "header", "comment", "comments", "social", "share",
    "related", "recommended", "popup", "modal", "breadcrumb", "tag", "tags",
    "category", "categories",
];

/// Configuration options for the extraction pipeline.
///
/// All fields are public for easy construction. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use webharvest::ExtractionConfig;
///
/// let config = ExtractionConfig {
///     max_workers: 10,
///     include_links: true,
///     ..ExtractionConfig::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExtractionConfig {
    /// Per-fetch deadline in milliseconds.
    ///
    /// Default: `30000`
    pub timeout_ms: u64,

    /// Batch concurrency ceiling (worker pool width).
    ///
    /// Default: `5`
    pub max_workers: usize,

    /// Whether table text counts toward content.
    ///
    /// Default: `true`
    pub include_tables: bool,

    /// Whether inline link text is retained.
    ///
    /// Default: `false`
    pub include_links: bool,

    /// Whether image alt text is retained.
    ///
    /// Default: `false`
    pub include_images: bool,

    /// Loosen the content-region acceptance threshold.
    ///
    /// When set (the default), a candidate region is accepted at 100
    /// characters; when unset the pipeline favors precision and requires
    /// 200 characters before accepting a region.
    ///
    /// Default: `true`
    pub favor_recall: bool,

    /// User-Agent header identifying the fetcher to remote servers.
    pub user_agent: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            max_workers: 5,
            include_tables: true,
            include_links: false,
            include_images: false,
            favor_recall: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ExtractionConfig {
    /// Per-fetch deadline as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Acceptance threshold for a content region, in characters.
    #[must_use]
    pub fn min_content_len(&self) -> usize {
        if self.favor_recall {
            100
        } else {
            200
        }
    }
}

/// Boilerplate-removal heuristics injected into the pruner.
///
/// The defaults reproduce the hand-tuned lists exactly; callers with
/// domain-specific markup can construct their own sets.
#[derive(Debug, Clone)]
pub struct PruneRules {
    /// Elements removed by exact tag name.
    pub remove_tags: Vec<String>,

    /// Elements removed when their class or id contains one of these
    /// substrings (matched case-insensitively).
    pub remove_patterns: Vec<String>,
}

impl Default for PruneRules {
    fn default() -> Self {
        Self {
            remove_tags: REMOVE_TAGS.iter().map(ToString::to_string).collect(),
            remove_patterns: REMOVE_PATTERNS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl PruneRules {
    /// True if a class or id attribute value matches one of the removal
    /// patterns.
    #[must_use]
    pub fn matches_class_or_id(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        self.remove_patterns.iter().any(|p| value.contains(p.as_str()))
    }
}
