//! Data models for crawled articles.
//!
//! This module defines the core data structures used throughout the application:
//! - [`ArticleRecord`]: A parsed article ready to be written out
//! - [`ArticleOutcome`]: The result of one extraction attempt, kept explicit so
//!   the failure path stays inspectable before it is collapsed to omission

use serde::{Deserialize, Serialize};

/// Category placeholder used when a page carries no rubric label.
pub const CATEGORY_UNKNOWN: &str = "N/A";

/// Date placeholder used when a page carries no `<time datetime=...>`.
pub const DATE_UNKNOWN: &str = "Unknown";

/// A single article as extracted from its page.
///
/// `title` and `content` are never empty. `category` and `created_date`
/// fall back to [`CATEGORY_UNKNOWN`] and [`DATE_UNKNOWN`].
///
/// # Fields
///
/// * `title` - Text of the first `<h1>`, or the document `<title>`
/// * `content` - Every paragraph's trimmed text, joined with single spaces
/// * `category` - Text of the first `.rubric-label` element
/// * `created_date` - The `datetime` attribute of the first `<time>` element, unvalidated
/// * `url` - Absolute URL the article was fetched from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_date: String,
    pub url: String,
}

/// What came out of one article extraction attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleOutcome {
    /// The page had a heading and body text.
    Parsed(ArticleRecord),
    /// The page was fetched but had no heading or no paragraph text.
    MissingFields { url: String },
    /// Fetching or reading the page failed.
    Failed { url: String, reason: String },
}

impl ArticleOutcome {
    /// The URL this outcome belongs to.
    pub fn url(&self) -> &str {
        match self {
            ArticleOutcome::Parsed(record) => &record.url,
            ArticleOutcome::MissingFields { url } => url,
            ArticleOutcome::Failed { url, .. } => url,
        }
    }

    /// Collapse the outcome to the published interface: a record or nothing.
    pub fn into_record(self) -> Option<ArticleRecord> {
        match self {
            ArticleOutcome::Parsed(record) => Some(record),
            _ => None,
        }
    }
}
