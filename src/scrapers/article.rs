//! Article page extraction.
//!
//! Four fixed queries are run against each page:
//!
//! | Field | Selector | Fallback |
//! |-------|----------|----------|
//! | title | `h1`, then `title` | record dropped |
//! | content | every `p` | record dropped |
//! | category | `.rubric-label` | `"N/A"` |
//! | created_date | `time` (its `datetime` attribute) | `"Unknown"` |

use crate::models::{ArticleOutcome, ArticleRecord, CATEGORY_UNKNOWN, DATE_UNKNOWN};
use crate::scrapers::fetcher::Fetcher;
use crate::scrapers::selector;
use crate::utils::truncate_for_log;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{error, info, instrument, warn};

static HEADING: Lazy<Selector> = Lazy::new(|| selector("h1"));
static DOCUMENT_TITLE: Lazy<Selector> = Lazy::new(|| selector("title"));
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| selector("p"));
static RUBRIC_LABEL: Lazy<Selector> = Lazy::new(|| selector(".rubric-label"));
static TIME: Lazy<Selector> = Lazy::new(|| selector("time"));

/// Trimmed text of every text node under `element`.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extract an [`ArticleRecord`] from article HTML.
///
/// Returns `None` when the page has no non-empty heading or no non-empty
/// paragraph text. Empty paragraphs are skipped so the body stays
/// single-space separated.
pub fn extract_article(html: &str, url: &str) -> Option<ArticleRecord> {
    let document = Html::parse_document(html);

    let title = document
        .select(&HEADING)
        .next()
        .or_else(|| document.select(&DOCUMENT_TITLE).next())
        .map(element_text)
        .unwrap_or_default();

    let content = document
        .select(&PARAGRAPH)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() || content.is_empty() {
        return None;
    }

    let category = document
        .select(&RUBRIC_LABEL)
        .next()
        .map(element_text)
        .unwrap_or_else(|| CATEGORY_UNKNOWN.to_string());

    let created_date = document
        .select(&TIME)
        .next()
        .and_then(|time| time.value().attr("datetime"))
        .map(str::to_string)
        .unwrap_or_else(|| DATE_UNKNOWN.to_string());

    Some(ArticleRecord {
        title,
        content,
        category,
        created_date,
        url: url.to_string(),
    })
}

/// Fetch and parse a single article.
///
/// Never fails: transport errors and pages without a heading or body come
/// back as [`ArticleOutcome::Failed`] and [`ArticleOutcome::MissingFields`].
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn parse_article(fetcher: &Fetcher, url: String) -> ArticleOutcome {
    info!(%url, "Parsing article");

    let html = match fetcher.fetch(&url).await {
        Ok(html) => html,
        Err(e) => {
            error!(%url, error = %e, "Article fetch failed");
            return ArticleOutcome::Failed {
                url,
                reason: e.to_string(),
            };
        }
    };

    match extract_article(&html, &url) {
        Some(record) => {
            info!(title = %truncate_for_log(&record.title, 120), "Article parsed");
            ArticleOutcome::Parsed(record)
        }
        None => {
            warn!(%url, "Missing title or content; article skipped");
            ArticleOutcome::MissingFields { url }
        }
    }
}
