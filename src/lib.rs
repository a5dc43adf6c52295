//! # webharvest
//!
//! Concurrent web article extraction: fetch raw HTML through a layered
//! strategy, strip navigation/advertisement/boilerplate markup, select the
//! most article-like content region, and normalize the text - across many
//! URLs at once with bounded concurrency and per-URL failure isolation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use webharvest::{extract_all, ExtractionConfig};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let urls = vec!["https://example.com/article".to_string()];
//! let results = extract_all(&urls, &ExtractionConfig::default()).await;
//!
//! for result in &results {
//!     if result.success {
//!         println!("{}: {} chars", result.url, result.content.as_deref().unwrap_or("").len());
//!     } else {
//!         eprintln!("{}: {}", result.url, result.error.as_deref().unwrap_or("unknown"));
//!     }
//! }
//! # }
//! ```
//!
//! ## Failure model
//!
//! A batch call always returns exactly one [`ExtractResult`] per input
//! URL; no error ever crosses the batch boundary. Callers branch on
//! [`ExtractResult::success`] rather than catching anything.

mod batch;
mod error;
mod extract;
mod fetch;
mod options;
mod result;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Best-effort metadata extraction (author, date, language, description, tags).
pub mod metadata;

/// Text normalization (whitespace, character filtering, sentence policy).
pub mod normalize;

/// Compiled patterns and ordered selector lists.
pub mod patterns;

/// Structural pruning of non-content markup.
pub mod prune;

/// Content-region and title selection.
pub mod select;

/// Result serialization (JSON, CSV, plain text).
pub mod serialize;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{ExtractionConfig, PruneRules};
pub use result::ExtractResult;

use log::error;
use prune::StructuralPruner;

/// Extract a single URL.
///
/// Fetches the page, then runs pruning, content selection, and
/// normalization. Never returns an error: failures are reported through
/// the result's `error`/`success` fields.
pub async fn extract(url: &str, config: &ExtractionConfig) -> ExtractResult {
    let parsed = match fetch::validate_url(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("{url}: {e}");
            return ExtractResult::failure(url, &e);
        }
    };

    let fetcher = match fetch::Fetcher::new(config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("{url}: {e}");
            return ExtractResult::failure(url, &e);
        }
    };

    match fetcher.fetch(&parsed).await.into_html() {
        Ok(html) => extract_html(url, &html, config),
        Err(e) => {
            error!("{url}: {e}");
            ExtractResult::failure(url, &e)
        }
    }
}

/// Extract from HTML the caller already holds, skipping the fetch stage.
#[must_use]
pub fn extract_html(url: &str, html: &str, config: &ExtractionConfig) -> ExtractResult {
    extract::extract_document(url, html, config, &StructuralPruner::default())
}

/// Extract a batch of URLs across a bounded worker pool.
///
/// Returns exactly one result per input URL. Completion order, not input
/// order: results arrive as workers finish. A failing URL never aborts or
/// delays the rest of the batch.
pub async fn extract_all(urls: &[String], config: &ExtractionConfig) -> Vec<ExtractResult> {
    batch::run(urls, config).await
}
