// src/main.rs

use clap::Parser;
use dep_versions::DpkgQuery;
use std::io;
use std::process::ExitCode;

mod cli;
mod commands;

use cli::Cli;

fn main() -> ExitCode {
    // Logs go to stderr; the report owns stdout
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    match commands::cmd_versions(&cli.package, DpkgQuery::new(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
