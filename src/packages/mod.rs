// src/packages/mod.rs

//! Installed package metadata sources
//!
//! Every source implements the `MetadataProvider` trait; the dpkg database is
//! the one backed by a real system tool.

pub mod dpkg_query;
pub mod traits;

pub use dpkg_query::DpkgQuery;
pub use traits::{MetadataProvider, PackageRecord, PackageRecords};

#[cfg(test)]
pub use traits::MockMetadataProvider;
