//! Formtrack - form component sync status reporter
//!
//! CLI entry point for the status report.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;

use formtrack::cli::render_report;
use formtrack::SyncReport;

/// Form component database sync status
///
/// Prints which form components have database sync wired up, which
/// still need it, and the overall migration progress.
#[derive(Parser, Debug)]
#[command(name = "formtrack", version, about)]
struct Cli {
    /// Emit the report as pretty-printed JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let report = SyncReport::from_registry();

    if cli.json {
        let json = serde_json::to_string_pretty(&report.summary())
            .context("Failed to serialize report summary")?;
        println!("{json}");
    } else {
        println!("{}", render_report(&report));
    }

    Ok(())
}
