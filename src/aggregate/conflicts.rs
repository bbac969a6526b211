//! Cross-image version conflict detection.

use crate::model::RecordStore;
use std::collections::{HashMap, HashSet};

/// All images observed running one version of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSighting {
    /// The version string as it appeared in the SBOM
    pub version: String,
    /// Images exhibiting this version, ascending lexical order
    pub images: Vec<String>,
}

/// One component name observed with two or more distinct versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConflict {
    /// Component name
    pub name: String,
    /// Lexical (byte-wise) maximum of the version set.
    ///
    /// Intentionally not SemVer-aware; downstream consumers rely on the
    /// lexical ordering, so e.g. "10.0" sorts below "9.0".
    pub latest: String,
    /// Per-version breakdown, versions ascending lexical order
    pub versions: Vec<VersionSighting>,
}

/// The full conflict report for one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictReport {
    /// Conflicting names, ascending lexical order
    pub conflicts: Vec<VersionConflict>,
}

impl ConflictReport {
    /// Whether any conflict was detected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Number of conflicting component names
    #[must_use]
    pub fn len(&self) -> usize {
        self.conflicts.len()
    }
}

/// Group records by name and surface every name carrying ≥2 distinct
/// versions across the fleet, regardless of component type.
///
/// Ordering of the result is fully explicit: names, versions within a name,
/// and images within a version are each sorted ascending lexically, so the
/// report is independent of record insertion order.
#[must_use]
pub fn detect_conflicts(store: &RecordStore) -> ConflictReport {
    // name -> version -> images
    let mut by_name: HashMap<&str, HashMap<&str, HashSet<&str>>> = HashMap::new();
    for record in store.iter() {
        by_name
            .entry(&record.name)
            .or_default()
            .entry(&record.version)
            .or_default()
            .insert(&record.source_image);
    }

    let mut conflicts: Vec<VersionConflict> = by_name
        .into_iter()
        .filter(|(_, versions)| versions.len() >= 2)
        .map(|(name, versions)| {
            let mut sightings: Vec<VersionSighting> = versions
                .into_iter()
                .map(|(version, images)| {
                    let mut images: Vec<String> = images.into_iter().map(String::from).collect();
                    images.sort();
                    VersionSighting {
                        version: version.to_string(),
                        images,
                    }
                })
                .collect();
            sightings.sort_by(|a, b| a.version.cmp(&b.version));
            // Sorted ascending, so the lexical maximum is the last entry
            let latest = sightings
                .last()
                .map(|s| s.version.clone())
                .unwrap_or_default();
            VersionConflict {
                name: name.to_string(),
                latest,
                versions: sightings,
            }
        })
        .collect();
    conflicts.sort_by(|a, b| a.name.cmp(&b.name));

    ConflictReport { conflicts }
}
