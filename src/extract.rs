//! Single-URL pipeline orchestration.
//!
//! Stage order within one URL is strictly sequential: parse, metadata
//! (on the full document, before pruning removes its sources), structural
//! pruning, content selection, text normalization. Metadata failures never
//! fail the URL; an empty normalized body does.

use dom_query::Document;
use log::{debug, info};

use crate::error::Error;
use crate::metadata;
use crate::normalize;
use crate::options::ExtractionConfig;
use crate::prune::StructuralPruner;
use crate::result::ExtractResult;
use crate::select;

/// Run the extraction stages over already-fetched HTML.
pub(crate) fn extract_document(
    url: &str,
    html: &str,
    config: &ExtractionConfig,
    pruner: &StructuralPruner,
) -> ExtractResult {
    let doc = Document::from(html);

    // Metadata first: it reads meta tags and the html element, which the
    // pruner is about to remove.
    let meta = metadata::extract_metadata(&doc);

    pruner.prune(&doc, config);

    let title = select::select_title(&doc);
    let body = select::select_body(&doc, config.min_content_len());
    let content = normalize::normalize(&body);

    if content.is_empty() {
        debug!("no content region met the threshold for {url}");
        return ExtractResult::failure(url, &Error::NoContent);
    }

    info!("extracted content: {url} ({} chars)", content.chars().count());

    ExtractResult {
        title,
        author: meta.author,
        date: meta.date,
        language: meta.language,
        description: meta.description,
        tags: meta.tags,
        ..ExtractResult::completed(url, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = r#"<html lang="en"><head>
        <title>Head Title</title>
        <meta name="author" content="A. Writer">
        <meta name="description" content="Summary line.">
    </head><body>
        <h1>Visible Title</h1>
        <article><p>This is a sufficiently long paragraph of article text
        exceeding the minimum threshold length requirement easily.</p></article>
        <nav>Home About Contact</nav>
    </body></html>"#;

    #[test]
    fn full_pipeline_populates_content_and_metadata() {
        let config = ExtractionConfig::default();
        let result = extract_document(
            "https://example.com/a",
            ARTICLE,
            &config,
            &StructuralPruner::default(),
        );

        assert!(result.success);
        assert!(result.error.is_none());
        assert_eq!(result.title.as_deref(), Some("Visible Title"));
        assert!(result.content.as_deref().is_some_and(|c| c.contains("sufficiently long")));
        assert!(!result.content.as_deref().unwrap_or_default().contains("Home"));
        assert_eq!(result.author.as_deref(), Some("A. Writer"));
        assert_eq!(result.description.as_deref(), Some("Summary line."));
        assert_eq!(result.language.as_deref(), Some("en"));
    }

    #[test]
    fn empty_page_maps_to_no_content_error() {
        let config = ExtractionConfig::default();
        let result = extract_document(
            "https://example.com/empty",
            "<html><body><nav>Home</nav></body></html>",
            &config,
            &StructuralPruner::default(),
        );

        assert!(!result.success);
        assert!(result.content.is_none());
        assert!(result
            .error
            .as_deref()
            .is_some_and(|e| e.contains("no content extracted")));
    }
}
