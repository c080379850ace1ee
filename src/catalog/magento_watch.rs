//! magento.watch API implementation

use std::time::Duration;

use reqwest::Url;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use crate::catalog::error::FetchError;
use crate::catalog::source::CatalogSource;
use crate::catalog::types::{CatalogResponse, VersionCatalog};
use crate::config::{FETCH_TIMEOUT_MS, USER_AGENT};

/// Catalog source backed by the magento.watch supported versions endpoint
#[derive(Clone)]
pub struct MagentoWatchClient {
    client: reqwest::Client,
    base_url: Url,
}

impl MagentoWatchClient {
    /// Creates a new client for the given base URL (e.g., "https://magento.watch/api/v1")
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_timeout(base_url, Duration::from_millis(FETCH_TIMEOUT_MS))
    }

    /// Creates a new client with a custom request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base_url =
            Url::parse(base_url).map_err(|e| FetchError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Builds `{base}/{distribution}/versions/supported`, encoding the distribution
    /// as a single path segment
    fn supported_versions_url(&self, distribution: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend([distribution, "versions", "supported"]);
        }
        url
    }
}

#[async_trait::async_trait]
impl CatalogSource for MagentoWatchClient {
    async fn fetch_catalog(&self, distribution: &str) -> Result<VersionCatalog, FetchError> {
        if distribution.is_empty() {
            return Err(FetchError::EmptyDistribution);
        }

        let url = self.supported_versions_url(distribution);
        debug!("Fetching supported versions from {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            warn!("magento.watch returned status {}: {}", status, url);
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body: CatalogResponse = response.json().await.map_err(|e| {
            if !e.is_decode() {
                return FetchError::Network(e);
            }
            warn!("Failed to parse magento.watch response: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        Ok(body.data)
    }
}
