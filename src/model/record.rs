//! The normalized component record extracted from one SBOM entry.

use serde::{Deserialize, Serialize};

/// Placeholder for any source field an SBOM omitted.
pub const UNKNOWN: &str = "unknown";

/// A flat `(type, name, version, source_image)` tuple.
///
/// One record is created per (document, component-entry) pair at load time
/// and is immutable thereafter. Equality and hashing cover all four fields,
/// which is what the record store deduplicates on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Component type as declared by the scanner (e.g. `library`, `os-package`)
    pub component_type: String,
    /// Component name
    pub name: String,
    /// Version string, compared lexically everywhere downstream
    pub version: String,
    /// Image the record was extracted from
    pub source_image: String,
}

impl ComponentRecord {
    /// Build a record, substituting `"unknown"` for any missing field.
    ///
    /// Output never carries absent or null fields, so downstream grouping
    /// and rendering can treat every field as a plain string.
    #[must_use]
    pub fn new(
        component_type: Option<String>,
        name: Option<String>,
        version: Option<String>,
        source_image: &str,
    ) -> Self {
        Self {
            component_type: component_type.unwrap_or_else(|| UNKNOWN.to_string()),
            name: name.unwrap_or_else(|| UNKNOWN.to_string()),
            version: version.unwrap_or_else(|| UNKNOWN.to_string()),
            source_image: source_image.to_string(),
        }
    }

    /// The composite `name@version` key used by the inventory view.
    #[must_use]
    pub fn name_at_version(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}
