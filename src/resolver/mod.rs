// src/resolver/mod.rs

//! Transitive dependency closure resolution
//!
//! Starting from a root package, metadata is fetched in rounds: each round
//! asks the provider for every referenced name that has no record yet, then
//! adds the dependencies of the new records to the referenced set. Resolution
//! ends when a round leaves nothing missing.
//!
//! Every name is fetched at most once, so shared dependencies and cycles
//! converge without any special handling. A name the provider does not know
//! aborts the resolution immediately.

use crate::error::{Error, Result};
use crate::packages::{MetadataProvider, PackageRecord, PackageRecords};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Result of resolving the dependency closure of one root package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    root: String,
    packages: PackageRecords,
    rounds: usize,
}

impl Resolution {
    /// The package resolution started from
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The root and all of its transitive dependencies, keyed by name
    pub fn packages(&self) -> &PackageRecords {
        &self.packages
    }

    /// Number of provider queries it took to reach the closure
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.packages.get(name)
    }
}

/// Resolves dependency closures against a metadata provider
pub struct ClosureResolver<P> {
    provider: P,
}

impl<P: MetadataProvider> ClosureResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Resolve `root` and everything it transitively depends on
    pub fn resolve(&self, root: &str) -> Result<Resolution> {
        let mut known = BTreeSet::from([root.to_string()]);
        let mut resolved = PackageRecords::new();
        let mut rounds = 0;

        loop {
            let missing: BTreeSet<String> = known
                .iter()
                .filter(|name| !resolved.contains_key(*name))
                .cloned()
                .collect();
            if missing.is_empty() {
                break;
            }

            rounds += 1;
            debug!(
                "Resolution round {}: fetching {} package(s)",
                rounds,
                missing.len()
            );

            let infos = self.provider.fetch(&missing)?;

            let absent: Vec<String> = missing
                .iter()
                .filter(|name| !infos.contains_key(*name))
                .cloned()
                .collect();
            if !absent.is_empty() {
                return Err(Error::PackageNotFoundError(absent));
            }

            for (name, info) in infos {
                if !missing.contains(&name) {
                    debug!("Ignoring unrequested record for {}", name);
                    continue;
                }
                debug!("{} {} ({})", name, info.version, info.status);
                known.extend(info.dependencies.iter().cloned());
                resolved.entry(name).or_insert(info);
            }
        }

        info!(
            "Resolved {} package(s) for {} in {} round(s)",
            resolved.len(),
            root,
            rounds
        );

        Ok(Resolution {
            root: root.to_string(),
            packages: resolved,
            rounds,
        })
    }
}
