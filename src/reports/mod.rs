//! Report rendering and output.
//!
//! Both reports are rendered as deterministic Markdown and written into the
//! directory that was scanned. Write failures are fatal for the run.

mod markdown;

pub use markdown::{render_conflicts, render_inventory, NO_CONFLICTS_SENTINEL};

use crate::aggregate::{ConflictReport, Inventory};
use crate::error::{FleetError, ReportErrorKind, Result};
use std::path::{Path, PathBuf};

/// Filename of the version-conflicts report
pub const CONFLICTS_FILENAME: &str = "version-conflicts.md";

/// Filename of the inventory report
pub const INVENTORY_FILENAME: &str = "inventory.md";

/// Paths of the two report files written by one run.
#[derive(Debug)]
pub struct WrittenReports {
    pub conflicts_path: PathBuf,
    pub inventory_path: PathBuf,
}

/// Render both reports and write them into `source_dir`.
///
/// `source_dir` is both the rendering context embedded in each header and
/// the output location; the caller passes the resolved absolute path.
pub fn write_reports(
    source_dir: &Path,
    conflicts: &ConflictReport,
    inventory: &Inventory,
) -> Result<WrittenReports> {
    let conflicts_path = source_dir.join(CONFLICTS_FILENAME);
    let inventory_path = source_dir.join(INVENTORY_FILENAME);

    write_report(&conflicts_path, &render_conflicts(conflicts, source_dir))?;
    write_report(&inventory_path, &render_inventory(inventory, source_dir))?;

    Ok(WrittenReports {
        conflicts_path,
        inventory_path,
    })
}

fn write_report(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| {
        FleetError::report(
            "writing report file",
            ReportErrorKind::WriteError {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        )
    })
}
