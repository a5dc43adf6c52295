//! CLI: batch-extract a list of URLs and write the results to a file.
//!
//! Usage:
//!   extract_urls <url-file> [output-file] [--format json|csv|txt] [--workers N] [--timeout-ms N]
//!
//! The URL file holds one URL per line; blank lines and `#` comments are
//! skipped. Output defaults to `results.json` in the current directory.

use std::env;
use std::fs;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use webharvest::serialize::{self, OutputFormat};
use webharvest::{extract_all, ExtractionConfig};

struct CliArgs {
    url_file: String,
    output_file: Option<String>,
    format: OutputFormat,
    workers: Option<usize>,
    timeout_ms: Option<u64>,
}

fn parse_args() -> Result<CliArgs> {
    let mut positional = Vec::new();
    let mut format = OutputFormat::Json;
    let mut workers = None;
    let mut timeout_ms = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" => {
                let value = args.next().context("--format requires a value")?;
                format = OutputFormat::from_str(&value).map_err(anyhow::Error::msg)?;
            }
            "--workers" => {
                let value = args.next().context("--workers requires a value")?;
                workers = Some(value.parse().context("--workers must be a number")?);
            }
            "--timeout-ms" => {
                let value = args.next().context("--timeout-ms requires a value")?;
                timeout_ms = Some(value.parse().context("--timeout-ms must be a number")?);
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: extract_urls <url-file> [output-file] \
                     [--format json|csv|txt] [--workers N] [--timeout-ms N]"
                );
                std::process::exit(0);
            }
            // Unrecognized options are ignored rather than rejected.
            other if other.starts_with("--") => {}
            other => positional.push(other.to_string()),
        }
    }

    let mut positional = positional.into_iter();
    let Some(url_file) = positional.next() else {
        bail!("missing <url-file> argument; see --help");
    };

    Ok(CliArgs {
        url_file,
        output_file: positional.next(),
        format,
        workers,
        timeout_ms,
    })
}

fn read_url_list(path: &str) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = parse_args()?;
    let urls = read_url_list(&cli.url_file)?;
    if urls.is_empty() {
        bail!("{} contains no URLs", cli.url_file);
    }

    let mut config = ExtractionConfig::default();
    if let Some(workers) = cli.workers {
        config.max_workers = workers;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }

    let started = std::time::Instant::now();
    let results = extract_all(&urls, &config).await;
    let succeeded = results.iter().filter(|r| r.success).count();

    let output_file = cli
        .output_file
        .unwrap_or_else(|| format!("results.{}", cli.format));
    serialize::save_results(&results, &output_file, cli.format)
        .with_context(|| format!("failed to write {output_file}"))?;

    println!(
        "Processed {} URL{} ({} succeeded, {} failed) in {:.1}s - results in {}",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        succeeded,
        results.len() - succeeded,
        started.elapsed().as_secs_f64(),
        output_file
    );

    Ok(())
}
