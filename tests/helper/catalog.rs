//! Catalog test utilities

use std::collections::HashMap;

use async_trait::async_trait;

use magento_matrix::catalog::types::CatalogResponse;
use magento_matrix::catalog::{CatalogSource, FetchError, VersionCatalog};

/// Response body shaped like the magento.watch supported versions endpoint
pub const SUPPORTED_VERSIONS_JSON: &str = r#"{
    "data": {
        "2.4.6-p13": {
            "version": "2.4.6-p13",
            "releaseDate": "2025-10-14",
            "eolDate": "2026-08-11",
            "systemRequirements": {
                "php": ["8.1", "8.2"],
                "composer": ["2.2"],
                "mysql": ["8.0"],
                "mariadb": ["10.11"],
                "elasticsearch": ["7.17", "8.17"],
                "opensearch": ["2.19"],
                "redis": ["7.2"],
                "rabbitmq": ["4.1"],
                "varnish": ["7.7"],
                "nginx": ["1.28"],
                "valkey": ["8"]
            },
            "isEOLVersion": false,
            "isSecureVersion": true,
            "isLatestVersion": false,
            "isFutureVersion": false,
            "statusLabel": "supported"
        },
        "2.4.7": {
            "version": "2.4.7",
            "releaseDate": "2024-04-09",
            "eolDate": "2027-04-09",
            "systemRequirements": {
                "php": ["8.2", "8.3"],
                "composer": ["2.7"]
            },
            "isEOLVersion": false,
            "isSecureVersion": false,
            "isLatestVersion": false,
            "isFutureVersion": false,
            "statusLabel": "insecure"
        },
        "2.4.7-p8": {
            "version": "2.4.7-p8",
            "releaseDate": "2025-10-14",
            "eolDate": "2027-04-09",
            "systemRequirements": {
                "php": ["8.2", "8.3"],
                "composer": ["2.9"],
                "mysql": ["8.0"],
                "mariadb": ["10.11"],
                "elasticsearch": ["7.17", "8.17"],
                "opensearch": ["2.19"],
                "redis": ["7.2"],
                "rabbitmq": ["4.1"],
                "varnish": ["7.7"],
                "nginx": ["1.28"],
                "valkey": ["8"]
            },
            "isEOLVersion": false,
            "isSecureVersion": true,
            "isLatestVersion": false,
            "isFutureVersion": false,
            "statusLabel": "supported"
        },
        "2.4.8-p3": {
            "version": "2.4.8-p3",
            "releaseDate": "2025-10-14",
            "eolDate": "2028-04-08",
            "systemRequirements": {
                "php": ["8.3", "8.4"],
                "composer": ["2.9"],
                "mysql": ["8.4"],
                "mariadb": ["11.4"],
                "opensearch": ["3"],
                "rabbitmq": ["4.1"],
                "valkey": ["8"],
                "varnish": ["7.7"],
                "nginx": ["1.28"]
            },
            "isEOLVersion": false,
            "isSecureVersion": true,
            "isLatestVersion": true,
            "isFutureVersion": false,
            "statusLabel": "supported"
        }
    }
}"#;

/// Parsed form of [`SUPPORTED_VERSIONS_JSON`]
pub fn sample_catalog() -> VersionCatalog {
    serde_json::from_str::<CatalogResponse>(SUPPORTED_VERSIONS_JSON)
        .unwrap()
        .data
}

/// In-memory catalog source for testing
#[derive(Default)]
pub struct StaticCatalog {
    catalogs: HashMap<String, VersionCatalog>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, distribution: &str, catalog: VersionCatalog) -> Self {
        self.catalogs.insert(distribution.to_string(), catalog);
        self
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_catalog(&self, distribution: &str) -> Result<VersionCatalog, FetchError> {
        match self.catalogs.get(distribution) {
            Some(catalog) => Ok(catalog.clone()),
            None => Err(FetchError::Status {
                status: 404,
                reason: "Not Found".to_string(),
            }),
        }
    }
}
