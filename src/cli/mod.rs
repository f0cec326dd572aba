// src/cli/mod.rs
//! CLI definitions for dep-versions
//!
//! The command implementation lives in the `commands` module.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dep-versions")]
#[command(about = "Find the installed versions of a package and all of its dependencies", long_about = None)]
pub struct Cli {
    /// The package to show the installed dependency versions for
    pub package: String,
}
