//! Bounded-concurrency batch execution.
//!
//! One task per URL, a semaphore capping in-flight work at `max_workers`,
//! and results collected in completion order. Any fault inside a worker,
//! panics included, is converted into a failure result at the worker
//! boundary - the batch itself cannot abort because of one URL.

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use log::{error, info};
use tokio::sync::Semaphore;

use crate::error::Error;
use crate::options::ExtractionConfig;
use crate::result::ExtractResult;

/// Extract every URL with at most `config.max_workers` in flight.
///
/// Returns exactly one result per input URL, in completion order.
pub(crate) async fn run(urls: &[String], config: &ExtractionConfig) -> Vec<ExtractResult> {
    let config = Arc::new(config.clone());
    let semaphore = Arc::new(Semaphore::new(config.max_workers.max(1)));

    let mut tasks = FuturesUnordered::new();
    for url in urls {
        let url = url.clone();
        let config = Arc::clone(&config);
        let semaphore = Arc::clone(&semaphore);

        let handle = tokio::spawn({
            let url = url.clone();
            async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(closed) => {
                        return ExtractResult::failure(url.as_str(), &Error::Worker(closed.to_string()));
                    }
                };
                crate::extract(&url, &config).await
            }
        });

        tasks.push(async move {
            match handle.await {
                Ok(result) => result,
                // A panicked worker must not take the batch down with it.
                Err(join_error) => {
                    error!("worker fault for {url}: {join_error}");
                    ExtractResult::failure(url.as_str(), &Error::Worker(join_error.to_string()))
                }
            }
        });
    }

    let mut results = Vec::with_capacity(urls.len());
    while let Some(result) = tasks.next().await {
        results.push(result);
    }

    let succeeded = results.iter().filter(|r| r.success).count();
    info!(
        "batch complete: {} of {} URLs extracted",
        succeeded,
        results.len()
    );

    results
}
