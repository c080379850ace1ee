//! Version catalog layer
//!
//! Fetches the list of supported releases for a distribution from the
//! magento.watch API.
//!
//! # Modules
//!
//! - [`error`]: Error type for catalog fetches
//! - [`magento_watch`]: HTTP client for the magento.watch API
//! - [`source`]: `CatalogSource` trait for fetching catalogs
//! - [`types`]: `VersionMetadata` and `VersionCatalog`

pub mod error;
pub mod magento_watch;
pub mod source;
pub mod types;

pub use error::FetchError;
pub use magento_watch::MagentoWatchClient;
pub use source::CatalogSource;
pub use types::{VersionCatalog, VersionMetadata};
