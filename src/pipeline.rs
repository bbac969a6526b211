//! The single-pass aggregation pipeline.
//!
//! Load → store → {detect conflicts, build inventory} → render → write.
//! Either the batch completes and both reports are written, or it fails
//! before any report is written. No retries, no partial-output resumption.

use crate::aggregate::{build_inventory, detect_conflicts};
use crate::error::{FleetError, Result};
use crate::loader::load_directory;
use crate::reports::{write_reports, WrittenReports};
use std::path::Path;

/// Counters and output paths from one completed run.
#[derive(Debug)]
pub struct RunSummary {
    /// Files parsed successfully
    pub files_loaded: usize,
    /// Files skipped due to per-file errors
    pub files_skipped: usize,
    /// Distinct component records after deduplication
    pub record_count: usize,
    /// Component names with ≥2 distinct versions
    pub conflict_count: usize,
    /// Distinct component types in the inventory
    pub type_count: usize,
    /// Where the two reports were written
    pub reports: WrittenReports,
}

/// Run the full aggregation over one SBOM directory.
///
/// `dir` must be an existing directory; it is canonicalized so the report
/// headers embed the absolute path regardless of how the argument was
/// spelled. The two Markdown reports are written into the same directory.
pub fn run(dir: &Path) -> Result<RunSummary> {
    if !dir.is_dir() {
        return Err(FleetError::invalid_input(format!(
            "not a directory: {}",
            dir.display()
        )));
    }
    let dir = dir.canonicalize().map_err(|e| FleetError::io(dir, e))?;

    let outcome = load_directory(&dir)?;
    tracing::info!(
        "Loaded {} file(s) ({} skipped), {} distinct record(s)",
        outcome.files_loaded,
        outcome.files_skipped,
        outcome.store.len()
    );

    let conflicts = detect_conflicts(&outcome.store);
    let inventory = build_inventory(&outcome.store);
    let reports = write_reports(&dir, &conflicts, &inventory)?;

    tracing::info!(
        "Wrote {} and {} ({} conflict(s), {} type(s))",
        reports.conflicts_path.display(),
        reports.inventory_path.display(),
        conflicts.len(),
        inventory.type_count()
    );

    Ok(RunSummary {
        files_loaded: outcome.files_loaded,
        files_skipped: outcome.files_skipped,
        record_count: outcome.store.len(),
        conflict_count: conflicts.len(),
        type_count: inventory.type_count(),
        reports,
    })
}
