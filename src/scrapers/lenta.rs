//! Lenta.ru front page crawl.
//!
//! The seed page is fetched once and every `<a>` on it is considered, not
//! only the ones inside the news feed. A link is kept when, after expanding
//! site-relative paths, it contains the base URL anywhere in it. Duplicates
//! are dropped by exact string, keeping first appearance.
//!
//! Every kept link is then fetched and parsed concurrently over the same
//! session, and the run waits for all of them before returning. Records come
//! back in completion order.

use crate::config::CrawlConfig;
use crate::models::{ArticleOutcome, ArticleRecord};
use crate::scrapers::article::parse_article;
use crate::scrapers::fetcher::Fetcher;
use crate::scrapers::selector;
use futures::stream::{self, StreamExt};
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument};

static ANCHOR: Lazy<Selector> = Lazy::new(|| selector("a"));

/// Collect same-site article links from front page HTML.
///
/// A missing `href` counts as an empty string and is dropped by the
/// same-site check.
pub fn discover_links(html: &str, base_url: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&ANCHOR)
        .map(|anchor| {
            let href = anchor.value().attr("href").unwrap_or("");
            if href.starts_with('/') {
                format!("{base_url}{href}")
            } else {
                href.to_string()
            }
        })
        .filter(|href| href.contains(base_url))
        .unique()
        .collect()
}

/// Fetch the seed page and return its article links.
///
/// # Errors
///
/// Fails when the seed page cannot be fetched; the whole run depends on it.
#[instrument(level = "info", skip(fetcher))]
pub async fn index_articles(fetcher: &Fetcher, base_url: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let html = fetcher.fetch(base_url).await?;
    let article_urls = discover_links(&html, base_url);

    info!(count = article_urls.len(), source = base_url, "Indexed article URLs");
    debug!(urls = ?article_urls, "Article URLs");

    Ok(article_urls)
}

/// Parse every URL concurrently with at most `fan_out` fetches in flight.
///
/// All futures are driven on the calling task; results are yielded in the
/// order they complete.
#[instrument(level = "info", skip_all, fields(count = urls.len(), fan_out = fan_out))]
pub async fn fetch_articles(fetcher: &Fetcher, urls: Vec<String>, fan_out: usize) -> Vec<ArticleOutcome> {
    stream::iter(urls)
        .map(move |url| parse_article(fetcher, url))
        .buffer_unordered(fan_out.max(1))
        .collect()
        .await
}

/// Run one crawl and keep every per-article outcome.
///
/// The session lives for the duration of this call.
#[instrument(level = "info", skip_all, fields(base_url = %config.base_url))]
pub async fn crawl(config: &CrawlConfig) -> Result<Vec<ArticleOutcome>, Box<dyn Error>> {
    let fetcher = Fetcher::new(config)?;

    let article_urls = index_articles(&fetcher, &config.base_url).await?;
    let fan_out = config.fan_out(article_urls.len());
    debug!(count = article_urls.len(), fan_out, "Fanning out article fetches");

    let outcomes = fetch_articles(&fetcher, article_urls, fan_out).await;

    let parsed = outcomes
        .iter()
        .filter(|o| matches!(o, ArticleOutcome::Parsed(_)))
        .count();
    let missing = outcomes
        .iter()
        .filter(|o| matches!(o, ArticleOutcome::MissingFields { .. }))
        .count();
    let failed = outcomes.len() - parsed - missing;
    info!(total = outcomes.len(), parsed, missing, failed, "Completed article fetching");
    debug!(
        urls = ?outcomes
            .iter()
            .filter(|o| matches!(o, ArticleOutcome::Failed { .. }))
            .map(ArticleOutcome::url)
            .collect::<Vec<_>>(),
        "Failed article URLs"
    );

    Ok(outcomes)
}

/// Run one crawl and return the parsed articles only.
///
/// # Errors
///
/// Fails only when the session cannot be built or the seed page cannot be
/// fetched. Individual article failures are dropped.
pub async fn run(config: &CrawlConfig) -> Result<Vec<ArticleRecord>, Box<dyn Error>> {
    let outcomes = crawl(config).await?;
    Ok(outcomes
        .into_iter()
        .filter_map(ArticleOutcome::into_record)
        .collect())
}
