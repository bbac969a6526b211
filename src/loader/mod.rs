//! SBOM file discovery and loading.
//!
//! Discovers SBOM files in a directory, parses each into flat component
//! records, and merges them into a deduplicated [`RecordStore`]. A single
//! malformed input never aborts the batch: per-file failures are logged and
//! the file is skipped.

mod document;

pub use document::{parse_document, SbomDocument};

use crate::error::{FleetError, Result};
use crate::model::{ComponentRecord, RecordStore};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Fixed filename suffix the fleet scanner gives SBOM documents.
pub const SBOM_SUFFIX: &str = ".cdx.json";

/// Result of loading one directory of SBOM files.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Deduplicated records across all valid files
    pub store: RecordStore,
    /// Number of files parsed successfully
    pub files_loaded: usize,
    /// Number of files skipped due to per-file errors
    pub files_skipped: usize,
}

/// List the SBOM files in `dir`, sorted by path for stable logging.
///
/// Only the directory's immediate children are considered; discovery order
/// never influences report content, which is fully sorted downstream.
pub fn discover_sbom_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| FleetError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FleetError::io(dir, e))?;
        let path = entry.path();
        let is_sbom = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(SBOM_SUFFIX));
        if is_sbom && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read and parse one SBOM file into component records.
///
/// The file's bytes are fully consumed at open time; nothing re-reads the
/// file later in the run.
pub fn load_file(path: &Path) -> Result<Vec<ComponentRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| FleetError::io(path, e))?;
    parse_document(&content, &path.display().to_string())
}

/// Load every SBOM file in `dir` into a deduplicated record store.
///
/// Files are parsed in parallel; each worker produces its own record batch
/// and the batches are merged sequentially afterwards, so no shared state is
/// mutated concurrently.
pub fn load_directory(dir: &Path) -> Result<LoadOutcome> {
    let files = discover_sbom_files(dir)?;
    tracing::debug!("Discovered {} SBOM file(s) in {}", files.len(), dir.display());

    let parsed: Vec<(PathBuf, Result<Vec<ComponentRecord>>)> = files
        .into_par_iter()
        .map(|path| {
            let result = load_file(&path);
            (path, result)
        })
        .collect();

    let mut store = RecordStore::new();
    let mut files_loaded = 0;
    let mut files_skipped = 0;
    for (path, result) in parsed {
        match result {
            Ok(records) => {
                tracing::debug!("Loaded {} record(s) from {}", records.len(), path.display());
                store.extend(records);
                files_loaded += 1;
            }
            Err(err) => {
                tracing::warn!("Skipping {}: {}", path.display(), err);
                files_skipped += 1;
            }
        }
    }

    Ok(LoadOutcome {
        store,
        files_loaded,
        files_skipped,
    })
}
