//! Type-grouped component inventory.

use crate::model::RecordStore;
use std::collections::{HashMap, HashSet};

/// One distinct `name@version` pair and the images containing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    /// Composite `name@version` key
    pub key: String,
    /// Images containing this exact pair, ascending lexical order
    pub images: Vec<String>,
}

/// All entries of one component type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSection {
    /// Component type as declared by the scanner
    pub component_type: String,
    /// Entries keyed by `name@version`, ascending lexical order
    pub entries: Vec<InventoryEntry>,
}

/// The full inventory view for one aggregation run.
///
/// Carries no conflict semantics; it is the flat cross-image listing of
/// everything the fleet runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    /// Type sections, ascending lexical order
    pub sections: Vec<TypeSection>,
}

impl Inventory {
    /// Number of distinct component types observed
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.sections.len()
    }
}

/// Group records by type, then by `name@version`, each key mapped to the
/// set of images containing that exact pair.
///
/// Every grouping dimension is explicitly sorted (types, keys, images) so
/// the result is independent of record insertion order.
#[must_use]
pub fn build_inventory(store: &RecordStore) -> Inventory {
    // type -> name@version -> images
    let mut by_type: HashMap<&str, HashMap<String, HashSet<&str>>> = HashMap::new();
    for record in store.iter() {
        by_type
            .entry(&record.component_type)
            .or_default()
            .entry(record.name_at_version())
            .or_default()
            .insert(&record.source_image);
    }

    let mut sections: Vec<TypeSection> = by_type
        .into_iter()
        .map(|(component_type, keys)| {
            let mut entries: Vec<InventoryEntry> = keys
                .into_iter()
                .map(|(key, images)| {
                    let mut images: Vec<String> = images.into_iter().map(String::from).collect();
                    images.sort();
                    InventoryEntry { key, images }
                })
                .collect();
            entries.sort_by(|a, b| a.key.cmp(&b.key));
            TypeSection {
                component_type: component_type.to_string(),
                entries,
            }
        })
        .collect();
    sections.sort_by(|a, b| a.component_type.cmp(&b.component_type));

    Inventory { sections }
}
