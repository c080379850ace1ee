//! Build a CI test matrix from the versions magento.watch lists as supported.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────▶│   Filter    │────▶│   Matrix    │
//! │  (fetch)    │     │  (select)   │     │  (expand)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod matrix;
pub mod output;
pub mod pipeline;

pub use error::Error;
