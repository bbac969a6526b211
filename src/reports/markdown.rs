//! Markdown rendering of the two aggregate views.
//!
//! Rendering is a pure function of the aggregates and the resolved source
//! directory, so re-running on unchanged input yields byte-identical files.

use crate::aggregate::{ConflictReport, Inventory};
use std::path::Path;

/// Sentinel body line when no conflict was detected.
pub const NO_CONFLICTS_SENTINEL: &str = "No version conflicts found.";

/// Render the version-conflicts report.
///
/// The header embeds the resolved source directory; the body is either the
/// sentinel line or one section per conflicting name, each showing the
/// lexical-latest version and the per-version image breakdown.
#[must_use]
pub fn render_conflicts(report: &ConflictReport, source_dir: &Path) -> String {
    let mut lines = Vec::new();
    lines.push("# Version Conflicts".to_string());
    lines.push(String::new());
    lines.push(format!("Scanned directory: `{}`", source_dir.display()));
    lines.push(String::new());

    if report.is_empty() {
        lines.push(NO_CONFLICTS_SENTINEL.to_string());
    } else {
        for conflict in &report.conflicts {
            lines.push(format!("## {}", conflict.name));
            lines.push(String::new());
            lines.push(format!("Latest version (lexical): {}", conflict.latest));
            lines.push(String::new());
            for sighting in &conflict.versions {
                lines.push(format!("- {}", sighting.version));
                for image in &sighting.images {
                    lines.push(format!("  - {image}"));
                }
            }
            lines.push(String::new());
        }
        // Drop the blank line after the final section
        lines.pop();
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Render the component inventory report.
///
/// One section per type, one `name@version` entry per key with its images,
/// and a trailing summary line with the distinct type count.
#[must_use]
pub fn render_inventory(inventory: &Inventory, source_dir: &Path) -> String {
    let mut lines = Vec::new();
    lines.push("# Component Inventory".to_string());
    lines.push(String::new());
    lines.push(format!("Scanned directory: `{}`", source_dir.display()));
    lines.push(String::new());

    for section in &inventory.sections {
        lines.push(format!("## {}", section.component_type));
        lines.push(String::new());
        for entry in &section.entries {
            lines.push(format!("- {}", entry.key));
            for image in &entry.images {
                lines.push(format!("  - {image}"));
            }
        }
        lines.push(String::new());
    }

    lines.push(format!(
        "{} component type(s) scanned.",
        inventory.type_count()
    ));
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{build_inventory, detect_conflicts};
    use crate::model::{ComponentRecord, RecordStore};

    fn rec(ty: &str, name: &str, version: &str, image: &str) -> ComponentRecord {
        ComponentRecord::new(
            Some(ty.into()),
            Some(name.into()),
            Some(version.into()),
            image,
        )
    }

    #[test]
    fn empty_conflicts_render_sentinel() {
        let report = ConflictReport::default();
        let output = render_conflicts(&report, Path::new("/fleet/sboms"));
        assert!(output.contains("`/fleet/sboms`"));
        assert!(output.contains(NO_CONFLICTS_SENTINEL));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn conflict_section_shows_latest_and_breakdown() {
        let store: RecordStore = vec![
            rec("library", "foo", "1.0", "a"),
            rec("library", "foo", "2.0", "b"),
        ]
        .into_iter()
        .collect();
        let output = render_conflicts(&detect_conflicts(&store), Path::new("/fleet"));

        assert!(output.contains("## foo"));
        assert!(output.contains("Latest version (lexical): 2.0"));
        let v1 = output.find("- 1.0").expect("1.0 listed");
        let v2 = output.find("- 2.0").expect("2.0 listed");
        assert!(v1 < v2, "versions ascending");
        assert!(output.contains("  - a"));
        assert!(output.contains("  - b"));
    }

    #[test]
    fn inventory_renders_sections_and_summary() {
        let store: RecordStore = vec![
            rec("library", "foo", "1.0", "b"),
            rec("library", "foo", "1.0", "a"),
            rec("os-package", "zlib", "1.3", "a"),
        ]
        .into_iter()
        .collect();
        let output = render_inventory(&build_inventory(&store), Path::new("/fleet"));

        assert!(output.contains("## library"));
        assert!(output.contains("## os-package"));
        assert!(output.contains("- foo@1.0\n  - a\n  - b"));
        assert!(output.trim_end().ends_with("2 component type(s) scanned."));
    }

    #[test]
    fn empty_inventory_reports_zero_types() {
        let output = render_inventory(&Inventory::default(), Path::new("/fleet"));
        assert!(output.trim_end().ends_with("0 component type(s) scanned."));
    }
}
