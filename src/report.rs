// src/report.rs

//! Name/version report for a resolved dependency closure

use crate::error::{Error, Result};
use crate::packages::PackageRecords;

/// Format one `name version` line per package, sorted by name
///
/// Names are left-aligned and padded to the width of the longest name, so
/// the versions line up in a single column.
pub fn format_report(packages: &PackageRecords) -> Result<String> {
    let width = packages
        .keys()
        .map(|name| name.chars().count())
        .max()
        .ok_or_else(|| Error::ReportError("no packages to report".to_string()))?;

    let mut report = String::new();
    for (name, record) in packages {
        report.push_str(&format!("{:<width$} {}\n", name, record.version, width = width));
    }

    Ok(report)
}
