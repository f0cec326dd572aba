// src/commands/mod.rs
//! Command handlers for the dep-versions CLI

mod versions;

pub use versions::cmd_versions;
