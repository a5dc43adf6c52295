//! Structural pruning.
//!
//! Removes non-content DOM subtrees before content selection: first by
//! exact tag name, then by pattern match against class/id attributes.
//! Both passes are idempotent, so re-running on an already-pruned document
//! is a no-op.

use dom_query::{Document, Selection};

use crate::options::{ExtractionConfig, PruneRules};

/// Removes known non-content elements from a document in place.
#[derive(Debug, Clone, Default)]
pub struct StructuralPruner {
    rules: PruneRules,
}

impl StructuralPruner {
    /// Pruner with injected heuristics.
    #[must_use]
    pub fn new(rules: PruneRules) -> Self {
        Self { rules }
    }

    /// Prune `doc` in place.
    ///
    /// Tag-name removal runs first, then class/id pattern removal, then the
    /// config-driven inclusion toggles (tables, links, images). Content
    /// selection must only run on a fully pruned document.
    pub fn prune(&self, doc: &Document, config: &ExtractionConfig) {
        for tag in &self.rules.remove_tags {
            doc.select(tag.as_str()).remove();
        }

        self.remove_by_class_and_id(doc);

        if !config.include_tables {
            doc.select("table").remove();
        }
        if !config.include_links {
            doc.select("a").remove();
        }
        if config.include_images {
            materialize_image_alt_text(doc);
        } else {
            doc.select("img").remove();
        }
    }

    /// Remove every element whose class or id contains one of the
    /// configured substrings, case-insensitively.
    fn remove_by_class_and_id(&self, doc: &Document) {
        let mut doomed = Vec::new();

        for node in doc.select("*").nodes() {
            let sel = Selection::from(*node);
            let class_matches = sel
                .attr("class")
                .is_some_and(|class| self.rules.matches_class_or_id(&class));
            let id_matches = sel
                .attr("id")
                .is_some_and(|id| self.rules.matches_class_or_id(&id));
            if class_matches || id_matches {
                doomed.push(sel);
            }
        }

        for sel in doomed {
            sel.remove();
        }
    }
}

/// Replace each `img` element with its alt text so image descriptions
/// survive into text extraction.
fn materialize_image_alt_text(doc: &Document) {
    let mut images = Vec::new();
    for node in doc.select("img").nodes() {
        let sel = Selection::from(*node);
        let alt = sel.attr("alt").map(|a| a.trim().to_string()).unwrap_or_default();
        images.push((sel, alt));
    }

    for (sel, alt) in images {
        if alt.is_empty() {
            sel.remove();
        } else {
            let escaped = alt
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;");
            sel.replace_with_html(format!(" {escaped} ").as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prune_html(html: &str, config: &ExtractionConfig) -> String {
        let doc = Document::from(html);
        StructuralPruner::default().prune(&doc, config);
        doc.html().to_string()
    }

    #[test]
    fn removes_non_content_tags() {
        let html = r"<html><head><title>T</title></head><body>
            <nav>Home About</nav>
            <script>var x = 1;</script>
            <p>Article text stays.</p>
            <footer>Copyright</footer>
        </body></html>";
        let pruned = prune_html(html, &ExtractionConfig::default());

        assert!(pruned.contains("Article text stays."));
        assert!(!pruned.contains("Home About"));
        assert!(!pruned.contains("var x"));
        assert!(!pruned.contains("Copyright"));
    }

    #[test]
    fn removes_by_class_and_id_substring() {
        let html = r#"<body>
            <div class="Sidebar-left">noise</div>
            <div id="main-navigation">noise</div>
            <div class="story-body">keep me</div>
        </body>"#;
        let pruned = prune_html(html, &ExtractionConfig::default());

        assert!(!pruned.contains("noise"));
        assert!(pruned.contains("keep me"));
    }

    #[test]
    fn pruning_is_idempotent() {
        let html = r#"<body><aside>gone</aside><div class="ad-slot">gone</div><p>text</p></body>"#;
        let doc = Document::from(html);
        let pruner = StructuralPruner::default();
        let config = ExtractionConfig::default();

        pruner.prune(&doc, &config);
        let once = doc.html().to_string();
        pruner.prune(&doc, &config);
        let twice = doc.html().to_string();

        assert_eq!(once, twice);
    }

    #[test]
    fn table_toggle_controls_table_text() {
        let html = "<body><table><tr><td>cell text</td></tr></table><p>para</p></body>";

        let kept = prune_html(html, &ExtractionConfig::default());
        assert!(kept.contains("cell text"));

        let dropped = prune_html(
            html,
            &ExtractionConfig {
                include_tables: false,
                ..ExtractionConfig::default()
            },
        );
        assert!(!dropped.contains("cell text"));
        assert!(dropped.contains("para"));
    }

    #[test]
    fn link_text_dropped_unless_enabled() {
        let html = r#"<body><p>before <a href="/x">anchor text</a> after</p></body>"#;

        let dropped = prune_html(html, &ExtractionConfig::default());
        assert!(!dropped.contains("anchor text"));
        assert!(dropped.contains("before"));

        let kept = prune_html(
            html,
            &ExtractionConfig {
                include_links: true,
                ..ExtractionConfig::default()
            },
        );
        assert!(kept.contains("anchor text"));
    }

    #[test]
    fn image_alt_text_materialized_when_enabled() {
        let html = r#"<body><p>text <img src="x.png" alt="a chart of revenue"> more</p></body>"#;

        let without = prune_html(html, &ExtractionConfig::default());
        assert!(!without.contains("a chart of revenue"));

        let with = prune_html(
            html,
            &ExtractionConfig {
                include_images: true,
                ..ExtractionConfig::default()
            },
        );
        assert!(with.contains("a chart of revenue"));
    }
}
