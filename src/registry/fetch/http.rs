//! HTTP index fetching.
//!
//! Provides a blocking HTTP client for downloading repository indexes.
//! Each call makes exactly one request; nothing is retried or cached.

use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

/// Timeout applied to each request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Why a repository contributed no templates.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The repository URL is empty, relative, or not HTTP(S).
    #[error("Invalid repository URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Connecting, sending, or reading the body failed.
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    /// The body is not a JSON array of template descriptions.
    #[error("Failed to decode template index from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Fetches repository indexes over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with the default 30-second timeout.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent("templist")
            .timeout(timeout)
            .build()?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch the body at `url` as text.
    ///
    /// The URL is validated before any network activity. Non-2xx responses
    /// are reported as [`FetchError::Status`].
    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = parse_url(url)?;

        let response = self
            .client
            .get(parsed)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })
    }
}

fn parse_url(url: &str) -> Result<Url, FetchError> {
    let invalid = |message: String| FetchError::InvalidUrl {
        url: url.to_string(),
        message,
    };

    if url.trim().is_empty() {
        return Err(invalid("URL is empty".to_string()));
    }

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn default_timeout_is_30_seconds() {
        let fetcher = HttpFetcher::new().unwrap();
        assert_eq!(fetcher.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn custom_timeout() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(fetcher.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn empty_url_fails_before_request() {
        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch("").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn relative_url_is_invalid() {
        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch("/templates/index.json").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn non_http_scheme_is_invalid() {
        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch("ftp://example.com/index.json").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn fetch_returns_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/index.json");
            then.status(200).body("[]");
        });

        let fetcher = HttpFetcher::new().unwrap();
        let body = fetcher.fetch(&server.url("/index.json")).unwrap();

        mock.assert();
        assert_eq!(body, "[]");
    }

    #[test]
    fn fetch_sends_user_agent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/index.json")
                .header("user-agent", "templist");
            then.status(200).body("[]");
        });

        let fetcher = HttpFetcher::new().unwrap();
        fetcher.fetch(&server.url("/index.json")).unwrap();

        mock.assert();
    }

    #[test]
    fn error_status_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing.json");
            then.status(404).body("not found");
        });

        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch(&server.url("/missing.json")).unwrap_err();

        match err {
            FetchError::Status { status, .. } => assert_eq!(status, 404),
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[test]
    fn unreachable_host_is_request_error() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(2)).unwrap();
        let err = fetcher.fetch("http://127.0.0.1:1/index.json").unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
    }
}
