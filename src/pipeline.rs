//! Fetch, filter and build in sequence

use tracing::info;

use crate::catalog::source::CatalogSource;
use crate::config::Inputs;
use crate::error::Error;
use crate::filter::{SelectionPolicy, select};
use crate::matrix::{Matrix, build_matrix};

/// Runs one matrix computation for the given inputs.
///
/// The selection kind is resolved before the catalog is fetched, so an
/// unknown kind fails without a network request. Any error ends the run
/// without a matrix.
pub async fn run(source: &dyn CatalogSource, inputs: &Inputs) -> Result<Matrix, Error> {
    let policy = SelectionPolicy::from_kind(&inputs.kind, &inputs.custom_versions)?;

    info!("Fetching supported versions for {}...", inputs.distribution);
    let catalog = source.fetch_catalog(&inputs.distribution).await?;
    info!("Found {} supported versions", catalog.len());

    let selected = select(&catalog, &policy)?;
    info!(
        "Filtered to {} versions (kind: {})",
        selected.len(),
        policy.kind()
    );

    let matrix = build_matrix(selected);
    info!("Matrix has {} entries", matrix.include.len());

    Ok(matrix)
}
