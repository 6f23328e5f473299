//! HTTP transport for the Cauldron metrics API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use url::Url;

use crate::error::{Error, Result};
use crate::url::DEFAULT_HOST;

/// Client identification sent with every request.
pub const USER_AGENT: &str = concat!("cauldron/", env!("CARGO_PKG_VERSION"));

/// Issues GET requests against the metrics API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport without a request timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    /// Create a transport, optionally bounding each request by `timeout`.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("authority"),
            HeaderValue::from_static(DEFAULT_HOST),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Request(e.to_string()))?;

        Ok(Self { client })
    }

    /// Perform a single GET.
    ///
    /// The response is returned unread whatever its status; the caller decides
    /// what a non-success status means and owns the body until it is dropped.
    pub async fn get(&self, url: &Url) -> Result<Response> {
        let request = self
            .client
            .get(url.clone())
            .build()
            .map_err(|e| Error::Request(format!("{e}. URL: {url}")))?;

        log::debug!("GET {url}");
        self.client
            .execute(request)
            .await
            .map_err(|source| Error::Transport {
                url: url.to_string(),
                source,
            })
    }
}
