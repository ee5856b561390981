//! Primary page fetching and per-resource size measurement.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

/// Timeout for the primary page request.
pub const PAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for each per-image measurement request.
pub const IMAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Browser-identifying user agent, sent to reduce anti-bot rejections.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Failure classification for fetches.
///
/// A 403 gets its own variant because it almost always means the site is
/// rejecting automated clients, which warrants a distinct report message.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("access denied (403 Forbidden)")]
    AccessDenied,

    #[error("HTTP error {0}")]
    Http(u16),

    #[error("request timed out")]
    Timeout,

    #[error("connection failed")]
    Connection,

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connection
        } else {
            FetchError::Other(err.to_string())
        }
    }
}

/// Result of the primary page request.
///
/// Consumed immediately by the extractors; never retained across analyses.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Raw (decompressed) response body.
    pub body: Vec<u8>,

    /// Wall-clock seconds from request start to body fully read.
    pub elapsed_seconds: f64,

    /// Final HTTP status after redirects.
    pub status: u16,
}

impl FetchedPage {
    /// Payload size in KB.
    pub fn size_kb(&self) -> f64 {
        self.body.len() as f64 / 1024.0
    }
}

/// Seam for per-resource size measurement, substitutable in tests so the
/// pipeline can run against fixed measurements with no live network.
#[async_trait]
pub trait ResourceMeasurer: Send + Sync {
    /// Fetch a resource and return its payload size in KB.
    async fn measure_kb(&self, url: &str) -> Result<f64, FetchError>;
}

/// HTTP fetcher backed by a shared client carrying a realistic browser
/// header set (User-Agent, Accept, Accept-Language, Accept-Encoding,
/// Connection, Upgrade-Insecure-Requests).
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(
            "upgrade-insecure-requests",
            HeaderValue::from_static("1"),
        );

        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Perform the primary page request, measuring wall-clock elapsed time
    /// until the body is fully read.
    ///
    /// Any status outside the 2xx/3xx range is a failure.
    pub async fn fetch_page(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let start = Instant::now();
        let response = self.client.get(url).timeout(PAGE_TIMEOUT).send().await?;

        let status = response.status();
        if status.as_u16() == 403 {
            return Err(FetchError::AccessDenied);
        }
        if !(status.is_success() || status.is_redirection()) {
            return Err(FetchError::Http(status.as_u16()));
        }

        let body = response.bytes().await?;
        let elapsed_seconds = start.elapsed().as_secs_f64();
        debug!(
            url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_seconds,
            "fetched page"
        );

        Ok(FetchedPage {
            body: body.to_vec(),
            elapsed_seconds,
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl ResourceMeasurer for HttpFetcher {
    async fn measure_kb(&self, url: &str) -> Result<f64, FetchError> {
        let response = self.client.get(url).timeout(IMAGE_TIMEOUT).send().await?;
        let bytes = response.bytes().await?;
        let kb = bytes.len() as f64 / 1024.0;
        debug!(url, kb, "measured resource");
        Ok(kb)
    }
}
