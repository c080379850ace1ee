//! Types returned by the version catalog

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Compatible versions per service, ordered oldest to newest
/// (e.g., {"php": ["8.2", "8.3"], "elasticsearch": ["7.17", "8.17"]})
pub type SystemRequirements = IndexMap<String, Vec<String>>;

/// Supported versions keyed by version identifier, in upstream order
pub type VersionCatalog = IndexMap<String, VersionMetadata>;

/// Response body of the supported versions endpoint
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub data: VersionCatalog,
}

/// One published release of a distribution
///
/// Missing and `null` fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VersionMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub eol_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub system_requirements: SystemRequirements,
    #[serde(rename = "isEOLVersion", deserialize_with = "null_as_default")]
    pub is_eol_version: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_secure_version: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_latest_version: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_future_version: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub status_label: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl VersionMetadata {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            ..Self::default()
        }
    }

    /// Sets the compatible versions for a service
    pub fn with_requirement(mut self, service: &str, versions: &[&str]) -> Self {
        self.system_requirements.insert(
            service.to_string(),
            versions.iter().map(|v| v.to_string()).collect(),
        );
        self
    }

    /// Returns the compatible versions for a service, or an empty slice if unknown
    pub fn requirement(&self, service: &str) -> &[String] {
        self.system_requirements
            .get(service)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
