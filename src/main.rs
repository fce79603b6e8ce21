//! # Lenta News
//!
//! A single-pass crawler for the [Lenta.ru](https://lenta.ru) front page. It
//! collects every same-site link on the page, fetches and parses the linked
//! articles concurrently, and writes the result to a JSON file.
//!
//! ## Usage
//!
//! ```sh
//! lenta_news -r ./results
//! ```
//!
//! ## Architecture
//!
//! 1. **Indexing**: Fetch the front page and collect same-site links
//! 2. **Fetching**: Fetch and parse every link concurrently over one session
//! 3. **Output**: Write the parsed articles to `{results_dir}/articles.json`
//!
//! Everything runs on a single-threaded runtime; concurrency comes from
//! overlapping network reads, not from worker threads.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use outputs::json;
use utils::ensure_writable_dir;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("lenta_news starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = args.crawl_config()?;

    // Early check: fail before crawling if the results cannot be saved
    if let Err(e) = ensure_writable_dir(&args.results_dir).await {
        error!(
            path = %args.results_dir.display(),
            error = %e,
            "Results directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let articles = match scrapers::lenta::run(&config).await {
        Ok(articles) => articles,
        Err(e) => {
            error!(base_url = %config.base_url, error = %e, "Crawl failed; aborting run");
            return Err(e);
        }
    };
    info!(count = articles.len(), "Total articles collected");

    let path = json::write_articles(&articles, &args.results_dir).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        articles = articles.len(),
        path = %path.display(),
        "Execution complete"
    );

    Ok(())
}
