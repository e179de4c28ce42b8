//! Integration tests for tuneup-cli.
//!
//! Drives the compiled binary end-to-end against the built-in tables.
//! Every command runs in a scratch directory with the tables override
//! unset, so discovery always lands on the compiled-in defaults unless a
//! test explicitly provides a file.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `tuneup` command isolated from the host environment.
fn tuneup(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tuneup").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("TUNEUP_TABLES_FILE")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    tuneup(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("quote"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    tuneup(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_classify_match() {
    let temp = TempDir::new().unwrap();
    tuneup(&temp)
        .args([
            "--no-color",
            "classify",
            "my car needs an oil change and new brake pads",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("oil-change"));
}

#[test]
fn test_classify_no_match_is_success() {
    let temp = TempDir::new().unwrap();
    // Absence of a match is a normal result, not an error.
    tuneup(&temp)
        .args(["--no-color", "classify", "do you have a waiting room?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No catalog service matched"));
}

#[test]
fn test_classify_with_quote_chains_pipeline() {
    let temp = TempDir::new().unwrap();
    tuneup(&temp)
        .args(["--no-color", "classify", "--quote", "time for an oil change"])
        .assert()
        .success()
        .stdout(predicate::str::contains("oil-change"))
        .stdout(predicate::str::contains("90.00"));
}

#[test]
fn test_classify_json_output() {
    let temp = TempDir::new().unwrap();
    let assert = tuneup(&temp)
        .args([
            "--output-format",
            "json",
            "classify",
            "--quote",
            "dead battery",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"matched\": true"))
        .stdout(predicate::str::contains("battery-replacement"));

    // The whole payload must be parseable JSON.
    let raw = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["matched"], serde_json::Value::Bool(true));
}

#[test]
fn test_quote_catalog_service() {
    let temp = TempDir::new().unwrap();
    // Built-in oil-change is 60–120, midpoint 90.00.
    tuneup(&temp)
        .args(["--no-color", "quote", "oil-change"])
        .assert()
        .success()
        .stdout(predicate::str::contains("90.00"))
        .stdout(predicate::str::contains("Oil Change"))
        .stdout(predicate::str::contains("catalog"));
}

#[test]
fn test_quote_unknown_key_uses_default() {
    let temp = TempDir::new().unwrap();
    // Unrecognised input never fails: fixed default, key echoed verbatim.
    tuneup(&temp)
        .args(["--no-color", "quote", "xyzzy plugh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("150.00"))
        .stdout(predicate::str::contains("xyzzy plugh"))
        .stdout(predicate::str::contains("default"));
}

#[test]
fn test_quote_json_has_reference_and_timestamp() {
    let temp = TempDir::new().unwrap();
    let assert = tuneup(&temp)
        .args(["--output-format", "json", "quote", "oil-change"])
        .assert()
        .success();

    let raw = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value["reference"].is_string());
    assert!(value["generated_at"].is_string());
    assert_eq!(value["amount"], serde_json::json!("90.00"));
}

#[test]
fn test_list_shows_catalog() {
    let temp = TempDir::new().unwrap();
    tuneup(&temp)
        .args(["--no-color", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Service Catalog"))
        .stdout(predicate::str::contains("oil-change"))
        .stdout(predicate::str::contains("brake-pads-front"));
}

#[test]
fn test_list_category_filter() {
    let temp = TempDir::new().unwrap();
    tuneup(&temp)
        .args(["--no-color", "list", "--category", "brakes", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("brake-pads-front"))
        .stdout(predicate::str::contains("oil-change").not());
}

#[test]
fn test_list_csv_format() {
    let temp = TempDir::new().unwrap();
    tuneup(&temp)
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id,name,category,min_price,max_price"));
}

#[test]
fn test_tables_file_override() {
    let temp = TempDir::new().unwrap();
    let tables = temp.path().join("services.toml");
    fs::write(
        &tables,
        r#"
            [[catalog]]
            id        = "widget-polish"
            name      = "Widget Polish"
            category  = "misc"
            min_price = "10.00"
            max_price = "30.00"

            [[lexicon]]
            service = "widget-polish"
            phrases = ["widget"]
        "#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("tuneup").unwrap();
    cmd.current_dir(temp.path())
        .env("TUNEUP_TABLES_FILE", &tables)
        .args(["--no-color", "quote", "widget-polish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20.00"))
        .stdout(predicate::str::contains("Widget Polish"));
}

#[test]
fn test_quiet_suppresses_output() {
    let temp = TempDir::new().unwrap();
    tuneup(&temp)
        .args(["--quiet", "classify", "oil change"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    tuneup(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tuneup"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    tuneup(&temp)
        .args(["--no-color", "config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[output]"));
}
