//! Character encoding detection and transcoding.
//!
//! Fetched bodies arrive as raw bytes; the charset is taken from the HTTP
//! Content-Type header when the server declares one, otherwise from HTML
//! meta tags, defaulting to UTF-8. Decoding is lossy: invalid sequences
//! become the Unicode replacement character rather than errors.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Extract the charset parameter from a Content-Type header value.
#[must_use]
pub fn charset_from_content_type(value: &str) -> Option<String> {
    value.split(';').map(str::trim).find_map(|param| {
        let (key, val) = param.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            Some(val.trim().trim_matches(['"', '\'']).to_string())
        } else {
            None
        }
    })
}

/// Detect character encoding from HTML bytes.
///
/// Looks for charset declarations in the first 1024 bytes:
/// `<meta charset="...">`, then the `http-equiv` Content-Type form,
/// defaulting to UTF-8 when neither is present.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    if let Some(charset) = extract_charset(&head_str) {
        if let Some(encoding) = Encoding::for_label(charset.as_bytes()) {
            return encoding;
        }
    }

    if let Some(charset) = extract_content_type_charset(&head_str) {
        if let Some(encoding) = Encoding::for_label(charset.as_bytes()) {
            return encoding;
        }
    }

    UTF_8
}

fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode a fetched body to a UTF-8 string.
///
/// `header_charset` is the charset parameter from the response's
/// Content-Type header, if any; it takes precedence over in-document
/// declarations.
#[must_use]
pub fn decode_body(body: &[u8], header_charset: Option<&str>) -> String {
    let encoding = header_charset
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or_else(|| detect_encoding(body));

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
