//! Crawl configuration passed to the fetcher and the driver.
//!
//! Nothing here is process-global: the CLI builds a [`CrawlConfig`] and hands
//! it down, and tests build their own pointing at a mock server.

use std::error::Error;
use std::num::NonZeroUsize;
use std::time::Duration;
use url::Url;

/// Front page crawled when no other base URL is given.
pub const DEFAULT_BASE_URL: &str = "https://lenta.ru";

/// Browser user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.93 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Seed page URL, without a trailing slash. Also the same-site marker
    /// that discovered links must contain.
    pub base_url: String,
    /// User agent header for the shared session.
    pub user_agent: String,
    /// Maximum article fetches in flight. `None` launches every task at once.
    pub concurrency: Option<NonZeroUsize>,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl CrawlConfig {
    /// Build a config for `base_url` with the default headers, unbounded
    /// fan-out and no timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, Box<dyn Error>> {
        Url::parse(base_url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            concurrency: None,
            timeout: None,
        })
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_concurrency(mut self, concurrency: Option<NonZeroUsize>) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Number of futures the driver keeps in flight for `pending` links.
    pub fn fan_out(&self, pending: usize) -> usize {
        match self.concurrency {
            Some(limit) => limit.get(),
            None => pending.max(1),
        }
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            concurrency: None,
            timeout: None,
        }
    }
}
