//! Tests for error handling and suggestions.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tuneup(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tuneup").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("TUNEUP_TABLES_FILE")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn test_unknown_config_key_has_suggestions() {
    let temp = TempDir::new().unwrap();
    tuneup(&temp)
        .args(["config", "get", "does.not.exist"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_explicit_missing_config_file_exits_4() {
    let temp = TempDir::new().unwrap();
    tuneup(&temp)
        .args(["--config", "/nonexistent/tuneup.toml", "list"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_broken_tables_file_is_user_error() {
    let temp = TempDir::new().unwrap();
    let tables = temp.path().join("services.toml");
    fs::write(&tables, "this is [ not { toml").unwrap();

    let mut cmd = Command::cargo_bin("tuneup").unwrap();
    cmd.current_dir(temp.path())
        .env("TUNEUP_TABLES_FILE", &tables)
        .args(["quote", "oil-change"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("parse error"));
}

#[test]
fn test_inverted_price_range_is_reported() {
    let temp = TempDir::new().unwrap();
    let tables = temp.path().join("services.toml");
    // Rows that fail validation are skipped with a warning; with no valid
    // catalog rows left the engine still answers, via the default price.
    fs::write(
        &tables,
        r#"
            [[catalog]]
            id        = "upside-down"
            name      = "Upside Down"
            min_price = "100.00"
            max_price = "10.00"
        "#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("tuneup").unwrap();
    cmd.current_dir(temp.path())
        .env("TUNEUP_TABLES_FILE", &tables)
        .args(["--no-color", "quote", "upside-down"])
        .assert()
        .success()
        .stdout(predicate::str::contains("150.00"))
        .stdout(predicate::str::contains("default"));
}

#[test]
fn test_missing_subcommand_shows_help() {
    let temp = TempDir::new().unwrap();
    tuneup(&temp)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_conflicting_flags_rejected() {
    let temp = TempDir::new().unwrap();
    tuneup(&temp)
        .args(["--quiet", "--verbose", "list"])
        .assert()
        .failure()
        .code(2);
}
