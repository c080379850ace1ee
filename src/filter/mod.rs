//! Version selection policies
//!
//! Narrows a [`VersionCatalog`] down to the versions a CI run should test:
//!
//! - `latest`: the highest patch of each minor line
//! - `all`: every supported version
//! - `custom`: an explicit comma-separated list of versions
//!
//! Every policy returns its selection sorted by plain string comparison of the
//! version identifier, so "2.4.10" sorts before "2.4.2". Downstream consumers
//! rely on this order; do not replace it with semantic version ordering.

pub mod line;

use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

use crate::catalog::types::{VersionCatalog, VersionMetadata};
use crate::filter::line::{minor_line, patch_number};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Version \"{0}\" not found in supported versions")]
    NotFound(String),

    #[error("Unknown kind: \"{0}\". Use \"latest\", \"all\", or \"custom\".")]
    UnknownPolicy(String),
}

/// How versions are selected from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Highest patch release of each minor line
    Latest,
    /// Every version in the catalog
    All,
    /// Comma-separated list of exact version identifiers
    Custom(String),
}

impl SelectionPolicy {
    /// Resolves a policy from its kind identifier.
    ///
    /// `custom_versions` is only used by the `custom` kind.
    pub fn from_kind(kind: &str, custom_versions: &str) -> Result<Self, SelectionError> {
        match kind {
            "latest" => Ok(SelectionPolicy::Latest),
            "all" => Ok(SelectionPolicy::All),
            "custom" => Ok(SelectionPolicy::Custom(custom_versions.to_string())),
            other => Err(SelectionError::UnknownPolicy(other.to_string())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SelectionPolicy::Latest => "latest",
            SelectionPolicy::All => "all",
            SelectionPolicy::Custom(_) => "custom",
        }
    }
}

/// Selects versions from the catalog according to the policy
pub fn select<'a>(
    catalog: &'a VersionCatalog,
    policy: &SelectionPolicy,
) -> Result<Vec<&'a VersionMetadata>, SelectionError> {
    match policy {
        SelectionPolicy::Latest => Ok(select_latest(catalog)),
        SelectionPolicy::All => Ok(select_all(catalog)),
        SelectionPolicy::Custom(requested) => select_custom(catalog, requested),
    }
}

/// Resolves `kind` into a policy and applies it
pub fn filter_versions<'a>(
    catalog: &'a VersionCatalog,
    kind: &str,
    custom_versions: &str,
) -> Result<Vec<&'a VersionMetadata>, SelectionError> {
    let policy = SelectionPolicy::from_kind(kind, custom_versions)?;
    select(catalog, &policy)
}

/// Groups versions by minor line and keeps the highest patch of each.
///
/// On equal patch numbers the entry enumerated later in the catalog wins.
pub fn select_latest(catalog: &VersionCatalog) -> Vec<&VersionMetadata> {
    let mut groups: IndexMap<&str, &VersionMetadata> = IndexMap::new();

    for info in catalog.values() {
        let line = minor_line(&info.version);
        let replace = groups
            .get(line)
            .is_none_or(|existing| patch_number(&info.version) >= patch_number(&existing.version));
        if replace {
            groups.insert(line, info);
        }
    }

    for (line, info) in &groups {
        debug!("Latest of {} is {}", line, info.version);
    }

    sorted(groups.into_values().collect())
}

/// Returns every version in the catalog
pub fn select_all(catalog: &VersionCatalog) -> Vec<&VersionMetadata> {
    sorted(catalog.values().collect())
}

/// Looks up each requested version by exact identifier.
///
/// Tokens are trimmed and empty tokens are ignored. Fails on the first token
/// missing from the catalog.
pub fn select_custom<'a>(
    catalog: &'a VersionCatalog,
    requested: &str,
) -> Result<Vec<&'a VersionMetadata>, SelectionError> {
    let selected = requested
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            catalog
                .get(token)
                .ok_or_else(|| SelectionError::NotFound(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(sorted(selected))
}

fn sorted(mut versions: Vec<&VersionMetadata>) -> Vec<&VersionMetadata> {
    versions.sort_by(|a, b| a.version.cmp(&b.version));
    versions
}
