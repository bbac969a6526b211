//! **Fleet-wide SBOM aggregation and version-conflict reporting.**
//!
//! `sbom-fleet` consumes the per-image SBOM documents a fleet-wide scan
//! deposits into a directory and aggregates them into two cross-image
//! Markdown reports:
//!
//! - `inventory.md` — every distinct `name@version` pair, grouped by
//!   component type, with the images containing it.
//! - `version-conflicts.md` — every component name observed with two or
//!   more distinct versions across the fleet, with a per-version breakdown.
//!
//! The engine does not run scans and does not fetch vulnerability data; it
//! is a pure aggregation pass over already-produced SBOM files. Version
//! comparison is lexical (byte-wise), not SemVer-aware — a documented
//! limitation, since downstream consumers rely on the existing ordering.
//!
//! ## Modules
//!
//! - [`model`] — the normalized [`ComponentRecord`] and its deduplicating
//!   [`RecordStore`].
//! - [`loader`] — SBOM file discovery and parsing; per-file failures are
//!   skipped so one bad SBOM never suppresses reporting on the rest.
//! - [`aggregate`] — pure grouping functions producing the conflict and
//!   inventory views with explicit sorting on every dimension.
//! - [`reports`] — deterministic Markdown rendering and file output.
//! - [`pipeline`] — the single-pass orchestration used by the CLI.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = sbom_fleet::pipeline::run(Path::new("/var/lib/fleet/sboms"))?;
//!     println!(
//!         "{} record(s) across {} file(s), {} conflict(s)",
//!         summary.record_count, summary.files_loaded, summary.conflict_count
//!     );
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod aggregate;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use aggregate::{build_inventory, detect_conflicts, ConflictReport, Inventory};
pub use error::{FleetError, Result};
pub use loader::{load_directory, LoadOutcome, SBOM_SUFFIX};
pub use model::{ComponentRecord, RecordStore};
pub use pipeline::{run, RunSummary};
pub use reports::{render_conflicts, render_inventory, CONFLICTS_FILENAME, INVENTORY_FILENAME};
