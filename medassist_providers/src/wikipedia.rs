use anyhow::{Context, Result};
use async_trait::async_trait;
use medassist_core::links::encode_path_segment;
use medassist_core::{SummaryConfig, SummarySource, normalize_extract};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a single lookup produced nothing. Never surfaced past this crate's
/// [`SummarySource`] impl; callers only ever see the fallback.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(StatusCode),

    #[error("Malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response body is not a JSON object")]
    NotAnObject,
}

/// Client for the Wikipedia REST page summary endpoint.
pub struct WikipediaSummary {
    client: Client,
    base_url: String,
}

impl WikipediaSummary {
    pub fn new(config: &SummaryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        info!("Creating WikipediaSummary for {}", config.base_url);
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Summary endpoint for `query`, which is encoded as one path segment.
    ///
    /// `/` is escaped as `%2F` as well, so `AC/DC` looks up the single title
    /// `AC/DC` instead of a sub-page path.
    #[must_use]
    pub fn summary_url(&self, query: &str) -> String {
        format!("{}/page/summary/{}", self.base_url, encode_path_segment(query))
    }

    /// One lookup attempt. `Ok(None)` means the page exists but has no usable extract.
    pub async fn try_fetch(&self, query: &str) -> Result<Option<String>, FetchError> {
        let response = self.client.get(self.summary_url(query)).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        let Some(object) = body.as_object() else {
            return Err(FetchError::NotAnObject);
        };

        let extract = object
            .get("extract")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Ok(normalize_extract(extract))
    }
}

#[async_trait]
impl SummarySource for WikipediaSummary {
    async fn fetch_extract(&self, query: &str) -> Option<String> {
        if query.is_empty() {
            return None;
        }

        match self.try_fetch(query).await {
            Ok(extract) => {
                if extract.is_none() {
                    debug!("Summary for '{query}' has no extract");
                }
                extract
            }
            Err(FetchError::Status(status)) => {
                debug!("No summary for '{query}': {status}");
                None
            }
            Err(e) => {
                warn!("Summary lookup for '{query}' failed: {e}");
                None
            }
        }
    }
}
