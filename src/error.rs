//! Error types for the extraction pipeline.
//!
//! Every variant's display string names the stage that failed (fetch,
//! extraction, worker) so that `ExtractResult::error` carries both a
//! human-readable cause and the failing stage. Metadata failures have no
//! variant here: they are absorbed silently and leave fields unset.

/// Error type for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested address is not a valid absolute http(s) URL.
    #[error("fetch failed: invalid URL: {0}")]
    InvalidUrl(String),

    /// The per-fetch deadline elapsed before a response was read.
    #[error("fetch failed: request timed out")]
    FetchTimeout,

    /// The server answered with a non-2xx status.
    #[error("fetch failed: HTTP status {0}")]
    FetchStatus(u16),

    /// DNS resolution or connection failure.
    #[error("fetch failed: {0}")]
    FetchNetwork(String),

    /// Both fetch strategies produced a zero-length body.
    #[error("fetch failed: empty response body")]
    EmptyBody,

    /// No content region met the length threshold.
    #[error("extraction failed: no content extracted")]
    NoContent,

    /// An unexpected fault inside a batch worker.
    #[error("worker failed: {0}")]
    Worker(String),
}

impl Error {
    /// Name of the pipeline stage this error originated from.
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_)
            | Self::FetchTimeout
            | Self::FetchStatus(_)
            | Self::FetchNetwork(_)
            | Self::EmptyBody => "fetch",
            Self::NoContent => "extraction",
            Self::Worker(_) => "worker",
        }
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
