use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, Url};

use crate::config::ApiConfig;

use super::error::{ClientError, FetchError};
use super::types::{ArtworkPage, PageRequest};
use super::DataSource;

/// HTTP client for `GET {base_url}/artworks`.
pub struct ArtworksClient {
    client: Client,
    base_url: String,
}

impl ArtworksClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request URL for one page. `cache_buster` goes into the `cb` parameter.
    pub fn page_url(&self, request: PageRequest, cache_buster: u128) -> Result<Url, FetchError> {
        let raw = format!("{}/artworks", self.base_url);
        let mut url = Url::parse(&raw).map_err(|_| FetchError::InvalidUrl { url: raw.clone() })?;
        url.query_pairs_mut()
            .append_pair("page", &request.page.to_string())
            .append_pair("limit", &request.limit.to_string())
            .append_pair("cb", &cache_buster.to_string());
        Ok(url)
    }

    /// Fetch one page, bypassing every cache on the way.
    pub async fn fetch_page(&self, request: PageRequest) -> Result<ArtworkPage, FetchError> {
        let url = self.page_url(request, cache_buster())?;

        tracing::debug!(url = %url, page = request.page, limit = request.limit, "Requesting artworks page");

        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            tracing::warn!(status = %status, latency_ms, "Artworks API returned an error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let page: ArtworkPage = serde_json::from_slice(&body)?;

        tracing::debug!(
            rows = page.data.len(),
            total = page.pagination.total,
            latency_ms,
            "Artworks page received"
        );

        Ok(page)
    }
}

#[async_trait]
impl DataSource for ArtworksClient {
    async fn fetch_page(&self, request: PageRequest) -> Result<ArtworkPage, FetchError> {
        ArtworksClient::fetch_page(self, request).await
    }
}

fn cache_buster() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
