//! Result serialization.
//!
//! Thin boundary adapter turning a batch of results into JSON, CSV, or
//! plain text. Field names and column order are fixed for compatibility;
//! the CSV form omits `tags`.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use log::info;

use crate::result::ExtractResult;

/// Separator line width in the plain-text format.
const TEXT_SEPARATOR_WIDTH: usize = 80;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "txt" | "text" => Ok(Self::Text),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Text => write!(f, "txt"),
        }
    }
}

/// Serialize results as a pretty-printed JSON array with fixed field
/// names.
pub fn to_json(results: &[ExtractResult]) -> io::Result<String> {
    serde_json::to_string_pretty(results).map_err(io::Error::other)
}

/// Serialize results as CSV with the fixed header row; `tags` is omitted
/// in this format.
pub fn to_csv(results: &[ExtractResult]) -> io::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "URL", "Title", "Content", "Author", "Date", "Language", "Error", "Success",
        ])
        .map_err(io::Error::other)?;

    for result in results {
        writer
            .write_record([
                result.url.as_str(),
                result.title.as_deref().unwrap_or_default(),
                result.content.as_deref().unwrap_or_default(),
                result.author.as_deref().unwrap_or_default(),
                result.date.as_deref().unwrap_or_default(),
                result.language.as_deref().unwrap_or_default(),
                result.error.as_deref().unwrap_or_default(),
                if result.success { "true" } else { "false" },
            ])
            .map_err(io::Error::other)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| io::Error::other(e.to_string()))?;
    String::from_utf8(bytes).map_err(io::Error::other)
}

/// Serialize results as labeled plain-text blocks separated by an
/// 80-character line.
#[must_use]
pub fn to_text(results: &[ExtractResult]) -> String {
    let mut out = String::new();

    for result in results {
        out.push_str(&format!("URL: {}\n", result.url));
        out.push_str(&format!("Title: {}\n", result.title.as_deref().unwrap_or_default()));
        out.push_str(&format!("Author: {}\n", result.author.as_deref().unwrap_or_default()));
        out.push_str(&format!("Date: {}\n", result.date.as_deref().unwrap_or_default()));
        out.push_str(&format!("Success: {}\n", result.success));
        if let Some(error) = result.error.as_deref() {
            out.push_str(&format!("Error: {error}\n"));
        }
        out.push_str(&format!(
            "Content:\n{}\n",
            result.content.as_deref().unwrap_or_default()
        ));
        out.push_str(&"-".repeat(TEXT_SEPARATOR_WIDTH));
        out.push('\n');
    }

    out
}

/// Render results in `format` and write them to `path`.
pub fn save_results(
    results: &[ExtractResult],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> io::Result<()> {
    let rendered = match format {
        OutputFormat::Json => to_json(results)?,
        OutputFormat::Csv => to_csv(results)?,
        OutputFormat::Text => to_text(results),
    };

    let path = path.as_ref();
    let mut file = std::fs::File::create(path)?;
    file.write_all(rendered.as_bytes())?;

    info!("results saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample() -> Vec<ExtractResult> {
        vec![
            ExtractResult {
                url: "https://example.com/a".to_string(),
                title: Some("A Title".to_string()),
                content: Some("Body, with a comma".to_string()),
                author: Some("Jane".to_string()),
                success: true,
                ..ExtractResult::default()
            },
            ExtractResult::failure("https://example.com/b", &Error::FetchStatus(404)),
        ]
    }

    #[test]
    fn json_is_an_array_with_fixed_fields() {
        let json = to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let array = value.as_array().unwrap();

        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["url"], "https://example.com/a");
        assert_eq!(array[0]["success"], true);
        assert_eq!(array[1]["success"], false);
        assert!(array[1]["content"].is_null());
    }

    #[test]
    fn csv_has_fixed_header_and_quotes_commas() {
        let csv = to_csv(&sample()).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("URL,Title,Content,Author,Date,Language,Error,Success")
        );
        let first = lines.next().unwrap();
        assert!(first.contains("\"Body, with a comma\""));
        assert!(first.ends_with("true"));
    }

    #[test]
    fn text_blocks_carry_labels_and_separator() {
        let text = to_text(&sample());

        assert!(text.contains("URL: https://example.com/a"));
        assert!(text.contains("Title: A Title"));
        assert!(text.contains("Success: true"));
        assert!(text.contains("Error: fetch failed: HTTP status 404"));
        assert!(text.contains(&"-".repeat(80)));
    }

    #[test]
    fn format_parses_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
