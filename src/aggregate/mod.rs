//! Cross-image aggregation over the record store.
//!
//! Both aggregators are pure functions returning owned aggregate structures,
//! so they unit-test in isolation and share no process-wide state.

mod conflicts;
mod inventory;

pub use conflicts::{detect_conflicts, ConflictReport, VersionConflict, VersionSighting};
pub use inventory::{build_inventory, Inventory, InventoryEntry, TypeSection};
