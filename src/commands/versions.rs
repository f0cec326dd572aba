// src/commands/versions.rs
//! Installed dependency version report

use anyhow::{Context, Result};
use dep_versions::{ClosureResolver, MetadataProvider, format_report};
use std::io::Write;
use tracing::info;

/// Resolve `package` against `provider` and write the version report to `out`
pub fn cmd_versions<P: MetadataProvider, W: Write>(
    package: &str,
    provider: P,
    out: &mut W,
) -> Result<()> {
    info!("Resolving installed dependencies of {}", package);

    let resolution = ClosureResolver::new(provider).resolve(package)?;
    let report = format_report(resolution.packages())?;

    out.write_all(report.as_bytes())
        .context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    Ok(())
}
