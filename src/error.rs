use thiserror::Error;

use crate::catalog::error::FetchError;
use crate::filter::SelectionError;

/// Any error that stops a matrix run
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}
