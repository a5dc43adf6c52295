//! URL fetching with a layered strategy.
//!
//! The primary attempt looks like a browser: realistic Accept headers,
//! redirects followed, body read as bytes and decoded through charset
//! detection. When it fails or comes back empty, a plain GET carrying only
//! the configured User-Agent is tried once. There are no retries beyond
//! that single fallback; callers wanting retry/backoff wrap `fetch`.

use std::error::Error as StdError;

use log::debug;
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::ExtractionConfig;

/// Classified outcome of one fetch, consumed immediately by the pipeline.
#[derive(Debug)]
pub(crate) enum FetchOutcome {
    /// 2xx response with a non-empty decoded body.
    Ok(String),
    /// Non-2xx response.
    HttpError(u16),
    /// Deadline elapsed.
    Timeout,
    /// DNS or connection failure.
    NetworkError(String),
    /// Zero-length body after both strategies.
    Empty,
}

impl FetchOutcome {
    /// Convert into HTML or the matching fetch-stage error.
    pub(crate) fn into_html(self) -> Result<String> {
        match self {
            Self::Ok(html) => Ok(html),
            Self::HttpError(status) => Err(Error::FetchStatus(status)),
            Self::Timeout => Err(Error::FetchTimeout),
            Self::NetworkError(cause) => Err(Error::FetchNetwork(cause)),
            Self::Empty => Err(Error::EmptyBody),
        }
    }
}

/// Resolves a URL to raw HTML. One fetcher per worker; the underlying
/// client and its connection pool are not shared between workers.
pub(crate) struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Build a fetcher from the pipeline configuration.
    pub(crate) fn new(config: &ExtractionConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::FetchNetwork(format!("client construction failed: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch `url`, classifying the outcome.
    ///
    /// The primary (browser-like) attempt short-circuits on success;
    /// otherwise the outcome is classified from the plain-GET fallback.
    pub(crate) async fn fetch(&self, url: &Url) -> FetchOutcome {
        let primary = self.attempt(url, true).await;
        if matches!(primary, FetchOutcome::Ok(_)) {
            return primary;
        }

        debug!("primary fetch failed for {url}, falling back to plain GET");
        let fallback = self.attempt(url, false).await;

        match (primary, fallback) {
            (_, ok @ FetchOutcome::Ok(_)) => ok,
            (FetchOutcome::Empty, FetchOutcome::Empty) => FetchOutcome::Empty,
            (_, fallback) => fallback,
        }
    }

    async fn attempt(&self, url: &Url, browser_headers: bool) -> FetchOutcome {
        let mut request = self.client.get(url.clone());
        if browser_headers {
            request = apply_browser_headers(request);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return classify_transport_error(&e),
        };

        let status = response.status();
        let header_charset = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(encoding::charset_from_content_type);

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return classify_transport_error(&e),
        };

        if !status.is_success() {
            return FetchOutcome::HttpError(status.as_u16());
        }

        let html = encoding::decode_body(&body, header_charset.as_deref());
        if html.trim().is_empty() {
            FetchOutcome::Empty
        } else {
            FetchOutcome::Ok(html)
        }
    }
}

/// Validate that a requested address is an absolute http(s) URL with a
/// host, before any network activity.
pub(crate) fn validate_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(Error::InvalidUrl(raw.to_string()));
    }

    Ok(url)
}

/// Headers matching a modern browser's content negotiation; used only on
/// the primary attempt, never on the plain fallback.
fn apply_browser_headers(request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    request
        .header(
            reqwest::header::ACCEPT,
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
        )
        .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
        .header(reqwest::header::CACHE_CONTROL, "max-age=0")
}

/// Map a reqwest error to timeout or network-error, keeping the source
/// chain in the message since reqwest's top-level text omits the cause.
fn classify_transport_error(error: &reqwest::Error) -> FetchOutcome {
    if error.is_timeout() {
        return FetchOutcome::Timeout;
    }

    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    FetchOutcome::NetworkError(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_absolute_http_urls() {
        assert!(validate_url("https://example.com/article").is_ok());
        assert!(validate_url("http://example.com").is_ok());
    }

    #[test]
    fn rejects_malformed_and_non_http_urls() {
        for bad in ["not a url", "ftp://example.com/x", "file:///etc/passwd", ""] {
            let err = validate_url(bad).unwrap_err();
            assert_eq!(err.stage(), "fetch", "expected fetch-stage error for {bad:?}");
        }
    }

    #[test]
    fn outcomes_map_to_stage_tagged_errors() {
        assert!(FetchOutcome::Ok("<html></html>".into()).into_html().is_ok());
        assert!(matches!(
            FetchOutcome::HttpError(404).into_html(),
            Err(Error::FetchStatus(404))
        ));
        assert!(matches!(FetchOutcome::Timeout.into_html(), Err(Error::FetchTimeout)));
        assert!(matches!(FetchOutcome::Empty.into_html(), Err(Error::EmptyBody)));
    }
}
