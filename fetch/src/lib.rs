//! Fetches track search results from the iTunes Search API.
//!
//! One call is one GET: no retries, no timeout beyond the transport default, nothing cached.
//! Failures are logged here, so callers that only want items can use [`Fetcher::load`].

use songsearch_protocol as proto;
use std::error::Error as _;
use thiserror::Error;
use tracing::{debug, error};

mod query;
pub use self::query::UrlError;

pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";
pub const DEFAULT_TERM: &str = "taylor swift";

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub base_url: String,
    /// What presentation layers search for on startup.
    pub term: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            term: DEFAULT_TERM.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] UrlError),
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),
    #[error("decoding response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl(_) => "invalid_url",
            FetchError::Network(_) => "network",
            FetchError::Decode(_) => "decode",
        }
    }

    /// The error and every underlying cause, joined with `: `.
    pub fn describe(&self) -> String {
        let mut description = self.to_string();
        // the wrapped error is already part of our own Display
        let mut source = match self {
            FetchError::InvalidUrl(inner) => inner.source(),
            FetchError::Network(inner) => inner.source(),
            FetchError::Decode(inner) => inner.source(),
        };
        while let Some(cause) = source {
            description.push_str(": ");
            description.push_str(&cause.to_string());
            source = cause.source();
        }
        description
    }
}

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    base_url: String,
}

impl Fetcher {
    pub fn new(config: &FetcherConfig) -> Result<Fetcher, FetchError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Fetcher {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn search_url(&self, term: &str) -> Result<url::Url, FetchError> {
        Ok(query::search_url(&self.base_url, term)?)
    }

    /// Runs one search. Items come back in the order the server listed them.
    pub async fn fetch(
        &self,
        term: &str,
    ) -> Result<Vec<proto::SearchResultItem>, FetchError> {
        let result = self.request(term).await;
        if let Err(error) = &result {
            error!(
                message = "fetch failed",
                kind = error.kind(),
                error = %error.describe()
            );
        }
        result
    }

    /// Like [`Fetcher::fetch`], but a failure (already logged) yields no items.
    pub async fn load(&self, term: &str) -> Vec<proto::SearchResultItem> {
        self.fetch(term).await.unwrap_or_default()
    }

    async fn request(&self, term: &str) -> Result<Vec<proto::SearchResultItem>, FetchError> {
        let url = self.search_url(term)?;
        debug!(message = "fetching", %url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let decoded: proto::SearchResponse = serde_json::from_slice(&body)?;
        debug!(message = "decoded", items = decoded.results.len());
        Ok(decoded.results)
    }
}
