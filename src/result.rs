//! Result type for the extraction pipeline.
//!
//! One [`ExtractResult`] is produced per requested URL, success or failure.
//! Serialized field names are fixed for output compatibility.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Result of extracting one URL.
///
/// Invariant: `success == true` implies `error` is `None` and `content` is
/// non-empty; `success == false` implies `error` is populated. Construct
/// through [`ExtractResult::completed`] and [`ExtractResult::failure`] to
/// keep the invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// The requested address.
    pub url: String,

    /// Best-guess document title.
    pub title: Option<String>,

    /// Normalized article body text.
    pub content: Option<String>,

    /// Best-effort author name(s).
    pub author: Option<String>,

    /// Best-effort publication date.
    pub date: Option<String>,

    /// Best-effort document language.
    pub language: Option<String>,

    /// Best-effort page description.
    pub description: Option<String>,

    /// Best-effort content tags, in document order.
    pub tags: Option<Vec<String>>,

    /// First failure encountered, with the failing stage named.
    pub error: Option<String>,

    /// True iff `content` is non-empty and no fatal error occurred.
    pub success: bool,
}

impl ExtractResult {
    /// A failure result for `url`; `content` stays unset.
    #[must_use]
    pub fn failure(url: impl Into<String>, error: &Error) -> Self {
        Self {
            url: url.into(),
            error: Some(error.to_string()),
            success: false,
            ..Self::default()
        }
    }

    /// A success result carrying non-empty `content`.
    #[must_use]
    pub(crate) fn completed(url: impl Into<String>, content: String) -> Self {
        debug_assert!(!content.is_empty());
        Self {
            url: url.into(),
            content: Some(content),
            success: true,
            ..Self::default()
        }
    }
}
