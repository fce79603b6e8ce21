//! HTTP session shared by every request of a crawl.

use crate::config::CrawlConfig;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::error::Error;
use tracing::{debug, info, instrument, warn};

/// One connection pool plus the fixed request headers.
///
/// The status code is never checked: an error page is returned as text just
/// like a successful one, and it is up to the extractor to find nothing in it.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build the shared session from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the user agent is not a valid header value or the
    /// TLS backend cannot be initialized.
    pub fn new(config: &CrawlConfig) -> Result<Self, Box<dyn Error>> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// GET `url` and return the body decoded as text.
    ///
    /// Transport errors are returned to the caller untouched.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>> {
        info!(%url, "Requesting URL");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Non-success status; parsing body anyway");
        }

        let body = response.text().await?;
        debug!(%url, bytes = body.len(), "Fetched body");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header_regex, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_sends_browser_user_agent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news/1"))
            .and(header_regex("user-agent", r"^Mozilla/5\.0 .*Chrome/90\.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>Привет</p>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = CrawlConfig::new(&mock_server.uri()).unwrap();
        let fetcher = Fetcher::new(&config).unwrap();
        let body = fetcher
            .fetch(&format!("{}/news/1", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(body, "<p>Привет</p>");
    }

    #[tokio::test]
    async fn test_fetch_returns_body_of_error_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404).set_body_string("<h1>Not Found</h1>"))
            .mount(&mock_server)
            .await;

        let config = CrawlConfig::new(&mock_server.uri()).unwrap();
        let fetcher = Fetcher::new(&config).unwrap();
        let body = fetcher
            .fetch(&format!("{}/gone", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(body, "<h1>Not Found</h1>");
    }

    #[tokio::test]
    async fn test_fetch_propagates_transport_error() {
        let config = CrawlConfig::default();
        let fetcher = Fetcher::new(&config).unwrap();

        let result = fetcher.fetch("http://127.0.0.1:1/unreachable").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_configured_timeout_applies() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&mock_server)
            .await;

        let config = CrawlConfig::new(&mock_server.uri())
            .unwrap()
            .with_timeout(Some(Duration::from_millis(100)));
        let fetcher = Fetcher::new(&config).unwrap();

        let result = fetcher.fetch(&format!("{}/slow", mock_server.uri())).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_user_agent_rejected() {
        let config = CrawlConfig::default().with_user_agent("bad\nagent");
        assert!(Fetcher::new(&config).is_err());
    }
}
