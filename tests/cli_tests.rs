//! Integration tests for the friendship CLI

mod common;

use common::{friendship, write_config};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    friendship()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: friendship"))
        .stdout(predicate::str::contains("distance"))
        .stdout(predicate::str::contains("neighbors"));
}

#[test]
fn test_version_flag() {
    friendship()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("friendship"));
}

// ============================================================================
// Built-in four-person graph
// ============================================================================

#[test]
fn test_default_run_prints_reference_distances() {
    friendship()
        .assert()
        .success()
        .stdout("1\n2\n0\n-1\n")
        .stderr(predicate::str::contains(
            "skipped: edge already in graph: Ross - Rachel",
        ))
        .stderr(predicate::str::contains(
            "skipped: edge already in graph: Ben - Ross",
        ));
}

#[test]
fn test_demo_quiet_hides_skipped() {
    friendship()
        .args(["demo", "--quiet"])
        .assert()
        .success()
        .stdout("1\n2\n0\n-1\n")
        .stderr(predicate::str::contains("skipped").not());
}

#[test]
fn test_demo_json() {
    let output = friendship()
        .args(["--format", "json", "demo"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1]["from"], "Rachel");
    assert_eq!(rows[1]["to"], "Ben");
    assert_eq!(rows[1]["distance"], 2);
    assert_eq!(rows[3]["distance"], -1);
}

#[test]
fn test_demo_json_keeps_stderr_clean() {
    friendship()
        .args(["--format", "json", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped").not());
}

#[test]
fn test_distance_command() {
    friendship()
        .args(["distance", "Ben", "Rachel"])
        .assert()
        .success()
        .stdout("2\n");

    friendship()
        .args(["distance", "Kramer", "Ross"])
        .assert()
        .success()
        .stdout("-1\n");
}

#[test]
fn test_neighbors_command() {
    friendship()
        .args(["neighbors", "Ross"])
        .assert()
        .success()
        .stdout("Rachel\nBen\n");

    friendship()
        .args(["neighbors", "Kramer"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_people_json() {
    friendship()
        .args(["people", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""Kramer""#));
}

// ============================================================================
// Errors and exit codes
// ============================================================================

#[test]
fn test_unknown_person_exit_code_3() {
    friendship()
        .args(["distance", "Rachel", "Joey"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: unknown person: Joey"));
}

#[test]
fn test_unknown_person_json_error() {
    let output = friendship()
        .args(["--format", "json", "neighbors", "Joey"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "unknown_person");
    assert_eq!(err["error"]["code"], 3);
}

#[test]
fn test_missing_argument_json_error() {
    let output = friendship()
        .args(["--format", "json", "distance", "Rachel"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
    assert_eq!(err["error"]["code"], 2);
    assert!(err["error"]["message"]
        .as_str()
        .unwrap()
        .contains("<TO>"));
}

#[test]
fn test_help_with_json_format_still_prints_help() {
    friendship()
        .args(["--format=json", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: friendship"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    friendship()
        .args(["--format", "yaml"])
        .assert()
        .code(2);
}

// ============================================================================
// Config files
// ============================================================================

#[test]
fn test_config_file() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
        people = ["a", "b", "c", "d"]
        friendships = [["a", "b"], ["b", "c"], ["c", "d"], ["d", "a"]]
        queries = [["a", "c"], ["b", "d"], ["a", "a"]]
        "#,
    );

    friendship()
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout("2\n2\n0\n")
        .stderr(predicate::str::contains("skipped").not());
}

#[test]
fn test_config_from_env() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "people = [\"solo\"]\n");

    friendship()
        .env("FRIENDSHIP_CONFIG", &path)
        .arg("people")
        .assert()
        .success()
        .stdout("solo\n");
}

#[test]
fn test_config_self_loop_rejected() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        "people = [\"a\"]\nfriendships = [[\"a\", \"a\"]]\n",
    );

    friendship()
        .arg("--config")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cannot add self-loop: a"));
}

#[test]
fn test_config_unlisted_person_rejected() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        "people = [\"a\"]\nfriendships = [[\"a\", \"b\"]]\n",
    );

    friendship()
        .arg("--config")
        .arg(&path)
        .arg("people")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex not in graph: b"));
}

#[test]
fn test_malformed_config_exit_code_1() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "people = 7\n");

    friendship()
        .arg("--config")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_missing_config_exit_code_1() {
    let dir = tempdir().unwrap();

    friendship()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .assert()
        .code(1);
}
