//! Front page crawling and article extraction.
//!
//! A crawl runs in two phases over one shared HTTP session:
//!
//! 1. **Indexing**: Fetch the seed page and collect every same-site link on it
//! 2. **Fetching**: Fetch and parse every discovered link concurrently
//!
//! # Submodules
//!
//! | Module | Role |
//! |--------|------|
//! | [`fetcher`] | Shared session with the browser headers, one GET per call |
//! | [`article`] | Heading, body, rubric and date extraction from an article page |
//! | [`lenta`] | Link discovery, fan-out and collection for a whole run |
//!
//! Failed article fetches are logged and dropped; only a failure to fetch the
//! seed page aborts the run.

use scraper::Selector;

pub mod article;
pub mod fetcher;
pub mod lenta;

/// Compile one of the fixed selectors. Panics on malformed CSS.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}
