//! HTTP feed fetcher
//!
//! Locators are resolved the way a browser resolves them against the page
//! that holds the lists: `../w_product_get_all` relative to
//! `http://host/static/index.html` is `http://host/w_product_get_all`.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Url;

use crate::domain::ports::{FeedFetcher, FetchedResponse};
use crate::error::{ClientError, FeedError};

/// Fetches feeds from the catalogue backend over HTTP
#[derive(Clone)]
pub struct HttpFeedFetcher {
    client: reqwest::Client,
    page_url: Url,
}

impl HttpFeedFetcher {
    /// Create a fetcher resolving relative locators against `page_url`
    pub fn new(page_url: &str) -> Result<Self, ClientError> {
        let page_url = Url::parse(page_url).map_err(|e| ClientError::InvalidPageUrl {
            url: page_url.to_string(),
            message: e.to_string(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client, page_url })
    }

    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    /// Resolve a locator against the page URL
    pub fn resolve(&self, locator: &str) -> Result<Url, FeedError> {
        self.page_url.join(locator).map_err(|e| {
            FeedError::Transport(format!("invalid resource locator {:?}: {}", locator, e))
        })
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, locator: &str) -> Result<FetchedResponse, FeedError> {
        let url = self.resolve(locator)?;
        tracing::debug!(%url, "GET feed");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        tracing::debug!(
            %url,
            status = status.as_u16(),
            content_type = ?response.headers().get(CONTENT_TYPE),
            "Feed response received"
        );

        let body = response.text().await?;

        Ok(FetchedResponse {
            status: status.as_u16(),
            body,
        })
    }
}
