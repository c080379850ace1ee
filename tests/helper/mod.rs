//! Shared test utilities

#![allow(dead_code, unused_imports)]

pub mod catalog;

pub use catalog::{StaticCatalog, SUPPORTED_VERSIONS_JSON, sample_catalog};
