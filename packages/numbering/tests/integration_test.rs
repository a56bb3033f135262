//! End-to-end tests for the catalog checker.
//!
//! Runs the file source, checker and report rendering against a fixture
//! catalog with three documents, two of which contain numbering errors.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use catalog_numbering::report::{render_json, render_text};
use catalog_numbering::{
    check_source, CheckReport, FileCatalogSource, NumberingKey, ParseErrorKind, StructuralError,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run_fixture(name: &str) -> CheckReport {
    let source = FileCatalogSource::new(fixture(name)).expect("supported fixture format");
    check_source(&source).expect("fixture loads")
}

fn key(segments: &[u32]) -> NumberingKey {
    NumberingKey::new(segments.to_vec()).expect("non-empty key")
}

#[test]
fn test_documents_ordered_by_part_number() {
    let report = run_fixture("catalog.json");

    let order: Vec<(&str, Option<u32>)> = report
        .documents
        .iter()
        .map(|d| (d.document_id.as_str(), d.part_number))
        .collect();
    assert_eq!(order, vec![("7", Some(1)), ("12", Some(2)), ("9", None)]);
    assert_eq!(report.records, 25);
}

#[test]
fn test_clean_document_with_fullwidth_labels() {
    let report = run_fixture("catalog.json");
    let part1 = &report.documents[0];

    // "3" is missing at the top level and "2．1"/"2. 2" use full-width and
    // spaced separators; neither is an error.
    assert!(part1.is_clean(), "unexpected errors: {part1:?}");
    assert_eq!(part1.entries, 8);
}

#[test]
fn test_structural_errors_in_part_two() {
    let report = run_fixture("catalog.json");
    let part2 = &report.documents[1];

    assert_eq!(part2.parse_failures.len(), 1);
    assert_eq!(part2.parse_failures[0].kind, ParseErrorKind::NoNumberingFound);
    assert_eq!(part2.parse_failures[0].label, "前言");

    let id = part2.document_id.clone();
    assert_eq!(
        part2.structural_errors,
        vec![
            StructuralError::MissingParent {
                document_id: id.clone(),
                key: key(&[3, 4, 1]),
                parent: key(&[3, 4]),
            },
            StructuralError::NonContiguousChildren {
                document_id: id.clone(),
                parent: key(&[3, 1]),
                missing: vec![2],
            },
            StructuralError::DuplicateChildren {
                document_id: id,
                parent: key(&[3, 2]),
                duplicates: vec![1],
            },
        ]
    );
}

#[test]
fn test_zero_child_and_malformed_label_in_appendix() {
    let report = run_fixture("catalog.json");
    let appendix = &report.documents[2];

    assert_eq!(appendix.parse_failures.len(), 1);
    assert_eq!(appendix.parse_failures[0].kind, ParseErrorKind::MalformedSegment);
    assert_eq!(appendix.parse_failures[0].segments, vec!["1", "x", "2"]);

    assert_eq!(appendix.structural_errors.len(), 1);
    assert!(matches!(
        &appendix.structural_errors[0],
        StructuralError::InvalidChildValue { invalid, .. } if invalid == &vec![0]
    ));
}

#[test]
fn test_totals() {
    let report = run_fixture("catalog.json");
    assert_eq!(report.parse_failure_count(), 2);
    assert_eq!(report.structural_error_count(), 4);
    assert_eq!(report.error_count(), 6);
    assert_eq!(report.entry_count(), 23);
    assert!(!report.is_clean());
}

#[test]
fn test_yaml_fixture_is_clean() {
    let report = run_fixture("catalog.yaml");
    assert_eq!(report.documents.len(), 1);
    assert_eq!(report.documents[0].part_number, Some(1));
    assert!(report.is_clean());
}

#[test]
fn test_reports_are_reproducible() {
    let first = run_fixture("catalog.json");
    let second = run_fixture("catalog.json");

    assert_eq!(first, second);
    assert_eq!(
        render_json(&first).expect("json"),
        render_json(&second).expect("json")
    );
    assert_eq!(render_text(&first), render_text(&second));
}
