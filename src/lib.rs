// src/lib.rs

//! dep-versions
//!
//! Finds the installed versions of a package and of every package it
//! transitively depends on, by querying the local package database.
//!
//! # Architecture
//!
//! - `packages`: metadata providers (the dpkg database via `dpkg-query`)
//! - `resolver`: fixpoint loop computing the dependency closure of a root
//! - `report`: sorted, column-aligned name/version output

mod error;
pub mod packages;
pub mod report;
pub mod resolver;

pub use error::{Error, Result};
pub use packages::{DpkgQuery, MetadataProvider, PackageRecord, PackageRecords};
pub use report::format_report;
pub use resolver::{ClosureResolver, Resolution};
