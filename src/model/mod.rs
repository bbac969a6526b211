//! Core data structures: the normalized component record and its store.

mod record;
mod store;

pub use record::{ComponentRecord, UNKNOWN};
pub use store::RecordStore;
