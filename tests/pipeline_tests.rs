//! End-to-end pipeline tests.
//!
//! These exercise the full load → aggregate → render → write pass over
//! scratch directories of SBOM files, asserting on the bytes of the two
//! generated reports.

use sbom_fleet::{pipeline, CONFLICTS_FILENAME, INVENTORY_FILENAME};
use serde_json::json;
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Build one scanner-shaped SBOM document for `image` with the given
/// `(type, name, version)` component entries.
fn sbom_json(image: &str, components: &[(&str, &str, &str)]) -> String {
    let entries: Vec<_> = components
        .iter()
        .map(|(ty, name, version)| json!({"type": ty, "name": name, "version": version}))
        .collect();
    json!({
        "bomFormat": "CycloneDX",
        "metadata": {"component": {"name": image}},
        "components": entries
    })
    .to_string()
}

fn write_sbom(dir: &Path, file: &str, content: &str) {
    std::fs::write(dir.join(file), content).expect("write sbom fixture");
}

fn read_report(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).expect("report should exist")
}

// ============================================================================
// Inventory & conflict content
// ============================================================================

#[test]
fn shared_record_lists_both_images_without_conflict() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_sbom(
        dir.path(),
        "a.cdx.json",
        &sbom_json("a", &[("library", "foo", "1.0")]),
    );
    write_sbom(
        dir.path(),
        "b.cdx.json",
        &sbom_json("b", &[("library", "foo", "1.0")]),
    );

    pipeline::run(dir.path()).expect("pipeline run");

    let inventory = read_report(dir.path(), INVENTORY_FILENAME);
    assert!(inventory.contains("## library"));
    assert_eq!(inventory.matches("- foo@1.0").count(), 1);
    assert!(inventory.contains("- foo@1.0\n  - a\n  - b"));
    assert!(inventory.contains("1 component type(s) scanned."));

    let conflicts = read_report(dir.path(), CONFLICTS_FILENAME);
    assert!(conflicts.contains("No version conflicts found."));
    assert!(!conflicts.contains("## foo"));
}

#[test]
fn differing_versions_are_reported_as_conflict() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_sbom(
        dir.path(),
        "a.cdx.json",
        &sbom_json("a", &[("library", "foo", "1.0")]),
    );
    write_sbom(
        dir.path(),
        "b.cdx.json",
        &sbom_json("b", &[("library", "foo", "2.0")]),
    );

    pipeline::run(dir.path()).expect("pipeline run");

    let conflicts = read_report(dir.path(), CONFLICTS_FILENAME);
    assert!(conflicts.contains("## foo"));
    assert!(conflicts.contains("Latest version (lexical): 2.0"));
    assert!(conflicts.contains("- 1.0\n  - a"));
    assert!(conflicts.contains("- 2.0\n  - b"));
}

#[test]
fn inventory_entry_count_matches_distinct_pairs() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_sbom(
        dir.path(),
        "a.cdx.json",
        &sbom_json(
            "a",
            &[
                ("library", "foo", "1.0"),
                ("library", "foo", "1.1"),
                ("library", "bar", "2.0"),
                ("os-package", "zlib", "1.3"),
            ],
        ),
    );
    write_sbom(
        dir.path(),
        "b.cdx.json",
        &sbom_json(
            "b",
            &[
                // Same pair as image a, must not create a second entry
                ("library", "foo", "1.0"),
                ("library", "baz", "0.9"),
            ],
        ),
    );

    pipeline::run(dir.path()).expect("pipeline run");

    let inventory = read_report(dir.path(), INVENTORY_FILENAME);
    let library_section = inventory
        .split("## ")
        .find(|s| s.starts_with("library"))
        .expect("library section");
    // 4 distinct (name, version) pairs of type library
    assert_eq!(library_section.matches("\n- ").count(), 4);
    assert!(inventory.contains("2 component type(s) scanned."));
}

#[test]
fn missing_fields_resolve_to_unknown() {
    let dir = tempfile::tempdir().expect("tempdir");
    // No metadata (image unknown), component with only a name
    write_sbom(
        dir.path(),
        "bare.cdx.json",
        &json!({"components": [{"name": "mystery"}]}).to_string(),
    );

    pipeline::run(dir.path()).expect("pipeline run");

    let inventory = read_report(dir.path(), INVENTORY_FILENAME);
    assert!(inventory.contains("## unknown"));
    assert!(inventory.contains("- mystery@unknown\n  - unknown"));
}

#[test]
fn header_embeds_absolute_source_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let summary = pipeline::run(dir.path()).expect("pipeline run");

    let canonical = dir.path().canonicalize().expect("canonicalize");
    assert!(canonical.is_absolute());
    let inventory = read_report(dir.path(), INVENTORY_FILENAME);
    assert!(inventory.contains(&format!("`{}`", canonical.display())));
    assert_eq!(summary.reports.inventory_path, canonical.join(INVENTORY_FILENAME));
}

// ============================================================================
// Error recovery
// ============================================================================

#[test]
fn malformed_file_does_not_abort_the_batch() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_sbom(dir.path(), "broken.cdx.json", "{this is not json");
    write_sbom(
        dir.path(),
        "no-components.cdx.json",
        &json!({"metadata": {"component": {"name": "c"}}}).to_string(),
    );
    write_sbom(
        dir.path(),
        "good.cdx.json",
        &sbom_json("a", &[("library", "foo", "1.0")]),
    );

    let summary = pipeline::run(dir.path()).expect("pipeline run");
    assert_eq!(summary.files_loaded, 1);
    assert_eq!(summary.files_skipped, 2);

    let inventory = read_report(dir.path(), INVENTORY_FILENAME);
    assert!(inventory.contains("- foo@1.0"));
}

#[test]
fn non_directory_argument_fails_without_output() {
    let file = tempfile::NamedTempFile::new().expect("tempfile");
    assert!(pipeline::run(file.path()).is_err());
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn empty_input_produces_sentinel_reports() {
    let dir = tempfile::tempdir().expect("tempdir");
    let summary = pipeline::run(dir.path()).expect("pipeline run");
    assert_eq!(summary.type_count, 0);

    let inventory = read_report(dir.path(), INVENTORY_FILENAME);
    assert!(inventory.trim_end().ends_with("0 component type(s) scanned."));
    let conflicts = read_report(dir.path(), CONFLICTS_FILENAME);
    assert!(conflicts.contains("No version conflicts found."));
}

#[test]
fn rerun_on_unchanged_input_is_byte_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_sbom(
        dir.path(),
        "a.cdx.json",
        &sbom_json("a", &[("library", "foo", "1.0"), ("binary", "busybox", "1.36")]),
    );
    write_sbom(
        dir.path(),
        "b.cdx.json",
        &sbom_json("b", &[("library", "foo", "2.0")]),
    );

    pipeline::run(dir.path()).expect("first run");
    let inventory_1 = read_report(dir.path(), INVENTORY_FILENAME);
    let conflicts_1 = read_report(dir.path(), CONFLICTS_FILENAME);

    pipeline::run(dir.path()).expect("second run");
    assert_eq!(read_report(dir.path(), INVENTORY_FILENAME), inventory_1);
    assert_eq!(read_report(dir.path(), CONFLICTS_FILENAME), conflicts_1);
}

#[test]
fn file_discovery_order_does_not_leak_into_output() {
    let doc_a = sbom_json("img-a", &[("library", "foo", "1.0")]);
    let doc_b = sbom_json("img-b", &[("library", "foo", "2.0")]);

    let dir = tempfile::tempdir().expect("tempdir");
    write_sbom(dir.path(), "1.cdx.json", &doc_a);
    write_sbom(dir.path(), "2.cdx.json", &doc_b);
    pipeline::run(dir.path()).expect("first run");
    let conflicts_1 = read_report(dir.path(), CONFLICTS_FILENAME);
    let inventory_1 = read_report(dir.path(), INVENTORY_FILENAME);

    // Swap which filename carries which document; identity comes from the
    // document metadata, so the reports must not change.
    write_sbom(dir.path(), "1.cdx.json", &doc_b);
    write_sbom(dir.path(), "2.cdx.json", &doc_a);
    pipeline::run(dir.path()).expect("second run");
    assert_eq!(read_report(dir.path(), CONFLICTS_FILENAME), conflicts_1);
    assert_eq!(read_report(dir.path(), INVENTORY_FILENAME), inventory_1);
}
