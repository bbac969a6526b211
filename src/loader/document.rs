//! Typed view of one per-image SBOM document.
//!
//! The fleet scanner emits CycloneDX-shaped JSON, one document per image.
//! Every field the engine reads is optional in the wild, so the whole
//! structure deserializes with `Option`s and the extraction step substitutes
//! `"unknown"` where a field is absent.

use crate::error::{FleetError, ParseErrorKind, Result};
use crate::model::{ComponentRecord, UNKNOWN};
use serde::Deserialize;

/// Top-level SBOM document
#[derive(Debug, Deserialize)]
pub struct SbomDocument {
    /// Document metadata carrying the scanned image's identity
    pub metadata: Option<Metadata>,
    /// Top-level component entries; nested component trees are not traversed
    pub components: Option<Vec<ComponentEntry>>,
}

/// Document-level metadata
#[derive(Debug, Deserialize)]
pub struct Metadata {
    /// The primary component describing the scanned image itself
    pub component: Option<MetadataComponent>,
}

/// The declared primary component of the document
#[derive(Debug, Deserialize)]
pub struct MetadataComponent {
    pub name: Option<String>,
    #[serde(rename = "bom-ref")]
    pub bom_ref: Option<String>,
}

/// One entry of the document's `components` array
#[derive(Debug, Deserialize)]
pub struct ComponentEntry {
    #[serde(rename = "type")]
    pub component_type: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
}

impl SbomDocument {
    /// Resolve the image identity of this document.
    ///
    /// Priority order: declared primary component name, then its `bom-ref`,
    /// then the literal `"unknown"`.
    #[must_use]
    pub fn image_identity(&self) -> String {
        self.metadata
            .as_ref()
            .and_then(|m| m.component.as_ref())
            .and_then(|c| c.name.clone().or_else(|| c.bom_ref.clone()))
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

/// Parse one SBOM document and flatten it into component records.
///
/// A document without a `components` array is an error here so the loader
/// can skip the file; an empty array is valid and yields no records.
pub fn parse_document(content: &str, context: &str) -> Result<Vec<ComponentRecord>> {
    let document: SbomDocument = serde_json::from_str(content).map_err(|e| {
        FleetError::parse(
            context.to_string(),
            ParseErrorKind::InvalidJson(e.to_string()),
        )
    })?;

    let image = document.image_identity();
    let Some(entries) = document.components else {
        return Err(FleetError::parse(
            context.to_string(),
            ParseErrorKind::MissingComponents,
        ));
    };

    Ok(entries
        .into_iter()
        .map(|entry| {
            ComponentRecord::new(entry.component_type, entry.name, entry.version, &image)
        })
        .collect())
}
