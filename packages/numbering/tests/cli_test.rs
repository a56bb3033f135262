//! Tests for the `catalog-numbering` binary.

use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn cmd() -> Command {
    Command::cargo_bin("catalog-numbering").expect("binary is built")
}

#[test]
fn test_check_text_report() {
    cmd()
        .arg("check")
        .arg(fixture("catalog.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[VALID001] parent 3.4 of 3.4.1 does not exist"))
        .stdout(predicate::str::contains("[PARSE002]"))
        .stdout(predicate::str::contains("Found 6 error(s)"));
}

#[test]
fn test_check_strict_fails_on_errors() {
    cmd()
        .arg("check")
        .arg(fixture("catalog.json"))
        .arg("--strict")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Catalog check failed with 6 error(s)"));
}

#[test]
fn test_check_strict_passes_clean_catalog() {
    cmd()
        .arg("check")
        .arg(fixture("catalog.yaml"))
        .arg("--strict")
        .assert()
        .success()
        .stdout(predicate::str::contains("All numbering is well-formed"));
}

#[test]
fn test_check_json_report() {
    let output = cmd()
        .arg("check")
        .arg(fixture("catalog.json"))
        .args(["--report", "json"])
        .output()
        .expect("command runs");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["documents"][0]["document_id"], "7");
    assert_eq!(value["documents"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_check_explicit_format() {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("temp file");
    writeln!(file, r#"[{{"document_id": 1, "label": "1 Scope"}}]"#).expect("write");

    cmd()
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported input format"));

    cmd()
        .arg("check")
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success();
}

#[test]
fn test_check_missing_input() {
    cmd()
        .arg("check")
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}
