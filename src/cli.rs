//! Command-line interface definitions for Lenta News.
//!
//! Every option has a default, so a bare `lenta_news` crawls
//! `https://lenta.ru` and writes `results/articles.json`.

use crate::config::{CrawlConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use clap::Parser;
use std::error::Error;
use std::num::{NonZeroU64, NonZeroUsize};
use std::path::PathBuf;
use std::time::Duration;

/// Command-line arguments for the Lenta News crawler.
///
/// # Examples
///
/// ```sh
/// # Crawl lenta.ru into ./results
/// lenta_news
///
/// # Bound the fan-out and give up on slow pages
/// lenta_news -r /tmp/lenta --concurrency 16 --timeout-secs 30
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Front page to crawl; discovered links must contain it
    #[arg(long, env = "LENTA_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory that receives articles.json
    #[arg(short, long, env = "LENTA_RESULTS_DIR", default_value = "results")]
    pub results_dir: PathBuf,

    /// User-Agent header sent with every request
    #[arg(long, env = "LENTA_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum article fetches in flight (unbounded when omitted)
    #[arg(long)]
    pub concurrency: Option<NonZeroUsize>,

    /// Per-request timeout in seconds (none when omitted)
    #[arg(long)]
    pub timeout_secs: Option<NonZeroU64>,
}

impl Cli {
    /// Build the crawl configuration described by these arguments.
    pub fn crawl_config(&self) -> Result<CrawlConfig, Box<dyn Error>> {
        Ok(CrawlConfig::new(&self.base_url)?
            .with_user_agent(self.user_agent.clone())
            .with_concurrency(self.concurrency)
            .with_timeout(self.timeout_secs.map(|secs| Duration::from_secs(secs.get()))))
    }
}
