//! sbom-fleet: aggregate per-image SBOMs into fleet-wide reports.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sbom-fleet")]
#[command(version)]
#[command(about = "Aggregate per-image SBOMs into fleet-wide reports", long_about = None)]
#[command(after_help = "OUTPUT:
    Writes version-conflicts.md and inventory.md into the scanned directory.

EXAMPLES:
    # Aggregate a directory of scanner output
    sbom-fleet /var/lib/fleet/sboms")]
struct Cli {
    /// Directory containing the per-image SBOM files (*.cdx.json)
    sbom_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let summary = sbom_fleet::pipeline::run(&cli.sbom_dir)
        .with_context(|| format!("aggregating SBOMs in {}", cli.sbom_dir.display()))?;

    if !cli.quiet {
        eprintln!(
            "Aggregated {} record(s) from {} file(s) ({} skipped): {} conflict(s), {} type(s)",
            summary.record_count,
            summary.files_loaded,
            summary.files_skipped,
            summary.conflict_count,
            summary.type_count
        );
    }

    Ok(())
}
