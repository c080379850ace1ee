//! Source trait for fetching version catalogs

#[cfg(test)]
use mockall::automock;

use crate::catalog::error::FetchError;
use crate::catalog::types::VersionCatalog;

/// Trait for fetching the supported versions of a distribution
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the catalog of supported versions
    ///
    /// # Arguments
    /// * `distribution` - The distribution identifier (e.g., "magento-community")
    ///
    /// # Returns
    /// * `Ok(VersionCatalog)` - Versions keyed by identifier, in upstream order
    /// * `Err(FetchError)` - If the request fails or the status is not a success
    async fn fetch_catalog(&self, distribution: &str) -> Result<VersionCatalog, FetchError>;
}
