// src/packages/dpkg_query.rs

//! Query installed dpkg packages from the system database
//!
//! A whole batch of package names is looked up with one `dpkg-query --show`
//! invocation. Each matching package produces one tab-separated line:
//!
//! ```text
//! Package<TAB>Version<TAB>Status<TAB>Depends
//! ```
//!
//! Packages that are not in the database produce no line at all; `dpkg-query`
//! reports them on stderr and exits with status 1.

use super::traits::{MetadataProvider, PackageRecord, PackageRecords};
use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Name of the query tool looked up on `PATH`
pub const DPKG_QUERY: &str = "dpkg-query";

/// Separator between the fields of one output line
pub const FIELD_SEPARATOR: char = '\t';

/// Number of fields in one output line
pub const FIELD_COUNT: usize = 4;

/// Show format passed to `dpkg-query`; the escapes are expanded by dpkg itself
pub const SHOW_FORMAT: &str = "${Package}\\t${Version}\\t${db:Status-Status}\\t${Depends}\\n";

/// Diagnostic printed by `dpkg-query` for a name it does not know
const NOT_FOUND_MARKER: &str = "no packages found matching";

/// Metadata provider backed by the local dpkg database
#[derive(Debug, Clone)]
pub struct DpkgQuery {
    program: PathBuf,
}

impl DpkgQuery {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from(DPKG_QUERY),
        }
    }

    /// Use a specific executable instead of `dpkg-query` from `PATH`
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn locate(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|e| {
            Error::ProviderError(format!(
                "{} not found: {}. Is dpkg installed?",
                self.program.display(),
                e
            ))
        })
    }
}

impl Default for DpkgQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataProvider for DpkgQuery {
    fn fetch(&self, names: &BTreeSet<String>) -> Result<PackageRecords> {
        let program = self.locate()?;
        debug!(
            "Querying {} package(s) with {}",
            names.len(),
            program.display()
        );

        let output = Command::new(&program)
            .arg("--show")
            .arg(format!("--showformat={}", SHOW_FORMAT))
            .arg("--")
            .args(names)
            // Diagnostics must stay untranslated to recognize unknown names
            .env("LC_ALL", "C")
            .output()
            .map_err(|e| {
                Error::ProviderError(format!("Failed to run {}: {}", program.display(), e))
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            if !only_missing_packages(output.status.code(), &stderr) {
                return Err(Error::ProviderError(format!(
                    "{} failed ({}): {}",
                    DPKG_QUERY,
                    output.status,
                    stderr.trim()
                )));
            }
            for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
                debug!("{}", line.trim());
            }
        }

        let records = parse_query_output(&String::from_utf8_lossy(&output.stdout))?;
        debug!(
            "{} returned {} of {} requested package(s)",
            DPKG_QUERY,
            records.len(),
            names.len()
        );
        Ok(records)
    }
}

/// Exit status 1 is also used when only some of the names were unknown
fn only_missing_packages(code: Option<i32>, stderr: &str) -> bool {
    if code != Some(1) {
        return false;
    }

    let mut lines = stderr
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .peekable();
    lines.peek().is_some() && lines.all(|l| l.contains(NOT_FOUND_MARKER))
}

/// Parse the full output of one query into records keyed by name
///
/// A name that appears twice keeps the record from its last line.
pub fn parse_query_output(output: &str) -> Result<PackageRecords> {
    let mut records = PackageRecords::new();

    for (index, line) in output.lines().enumerate() {
        let record = parse_record_line(index + 1, line)?;
        if records.contains_key(&record.name) {
            debug!("Duplicate record for {}, keeping the later one", record.name);
        }
        records.insert(record.name.clone(), record);
    }

    Ok(records)
}

fn parse_record_line(line_number: usize, line: &str) -> Result<PackageRecord> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [name, version, status, depends] = fields.as_slice() else {
        return Err(Error::ParseError {
            line_number,
            line: line.to_string(),
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    };

    Ok(PackageRecord::new(name.to_string(), version.to_string())
        .with_status(status.to_string())
        .with_dependencies(parse_dependency_clauses(depends)))
}

/// Extract package names from a raw `Depends` field
///
/// Each comma-separated clause contributes its first token, so version
/// constraints ("libc6 (>= 2.17)") and later alternatives ("a | b") are
/// dropped. Multi-arch qualifiers ("perl:any") are stripped because dpkg
/// reports installed packages by their bare name.
pub fn parse_dependency_clauses(depends: &str) -> Vec<String> {
    if depends.trim().is_empty() {
        return Vec::new();
    }

    depends
        .split(',')
        .filter_map(|clause| clause.split_whitespace().next())
        .map(strip_arch_qualifier)
        .map(str::to_string)
        .collect()
}

fn strip_arch_qualifier(name: &str) -> &str {
    name.split_once(':').map_or(name, |(package, _)| package)
}
