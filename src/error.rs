// src/error.rs

//! Error types for installed dependency resolution

use thiserror::Error;

/// Errors that can occur while resolving and reporting dependency versions
#[derive(Error, Debug)]
pub enum Error {
    /// The package database query could not be run or reported failure
    #[error("package query failed: {0}")]
    ProviderError(String),

    /// A record returned by the package database did not have the expected shape
    #[error("malformed package record on line {line_number} (expected {expected} fields, found {found}): {line:?}")]
    ParseError {
        line_number: usize,
        line: String,
        expected: usize,
        found: usize,
    },

    /// Requested packages are not known to the package database
    #[error("package(s) not found in package database: {}", .0.join(", "))]
    PackageNotFoundError(Vec<String>),

    /// The report could not be produced
    #[error("cannot format report: {0}")]
    ReportError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
