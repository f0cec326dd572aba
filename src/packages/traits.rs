// src/packages/traits.rs

//! Common types for package metadata providers

use crate::error::Result;
use std::collections::{BTreeMap, BTreeSet};

/// Installed metadata snapshot for a single package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    /// Installation state as reported by the package database (e.g. "installed")
    pub status: String,
    /// Names of directly required packages, in declaration order
    pub dependencies: Vec<String>,
}

impl PackageRecord {
    pub fn new(name: String, version: String) -> Self {
        Self {
            name,
            version,
            status: String::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: String) -> Self {
        self.status = status;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

/// Package records keyed by package name
pub type PackageRecords = BTreeMap<String, PackageRecord>;

/// Source of installed package metadata
#[cfg_attr(test, mockall::automock)]
pub trait MetadataProvider {
    /// Fetch metadata for every name in `names` with a single query
    ///
    /// Names unknown to the provider are left out of the result instead of
    /// producing an error, so callers detect absence by key lookup.
    fn fetch(&self, names: &BTreeSet<String>) -> Result<PackageRecords>;
}

impl<P: MetadataProvider + ?Sized> MetadataProvider for &P {
    fn fetch(&self, names: &BTreeSet<String>) -> Result<PackageRecords> {
        (**self).fetch(names)
    }
}
