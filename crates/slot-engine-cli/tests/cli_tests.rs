//! Integration tests for the `slots` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the best, dates
//! and submit subcommands through the actual binary, including stdin/stdout
//! piping, file I/O and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

/// Helper: path to the snapshot.json fixture.
fn snapshot_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/snapshot.json")
}

/// Helper: path to the answers.json fixture.
fn answers_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/answers.json")
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout must be valid JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// best subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn best_from_file() {
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args(["best", "-i", snapshot_path()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output.stdout);
    assert_eq!(
        value["2026-03-16"],
        json!({"startTime": "10:30", "endTime": "12:00", "overlapType": "everyone", "approxUsers": 3})
    );
    assert_eq!(
        value["2026-03-17"],
        json!({"startTime": "10:00", "endTime": "11:30", "overlapType": "most", "approxUsers": 2})
    );
    assert_eq!(value["2026-03-18"], Value::Null);
}

#[test]
fn best_keeps_snapshot_order_unless_sorted() {
    let unsorted = Command::cargo_bin("slots")
        .unwrap()
        .args(["best", "--compact", "-i", snapshot_path()])
        .output()
        .unwrap();
    let keys: Vec<String> = stdout_json(&unsorted.stdout)
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["2026-03-17", "2026-03-16", "2026-03-18"]);

    let sorted = Command::cargo_bin("slots")
        .unwrap()
        .args(["best", "--compact", "--sorted", "-i", snapshot_path()])
        .output()
        .unwrap();
    let keys: Vec<String> = stdout_json(&sorted.stdout)
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["2026-03-16", "2026-03-17", "2026-03-18"]);
}

#[test]
fn best_stdin_to_stdout() {
    let input = r#"[{"userId":"a","date":"2026-03-16","startTime":"14:00","endTime":"15:00"}]"#;

    Command::cargo_bin("slots")
        .unwrap()
        .args(["best", "--compact"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"2026-03-16":{"startTime":"14:00","endTime":"15:00","overlapType":"everyone","approxUsers":1}}"#,
        ));
}

#[test]
fn best_empty_snapshot() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["best", "--compact"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("{}"));
}

#[test]
fn best_with_shorter_minimum() {
    let input = r#"[
        {"userId":"a","date":"2026-03-16","startTime":"09:00","endTime":"09:45"},
        {"userId":"b","date":"2026-03-16","startTime":"09:00","endTime":"09:45"},
        {"userId":"c","date":"2026-03-16"}
    ]"#;

    Command::cargo_bin("slots")
        .unwrap()
        .args(["best", "--compact"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""2026-03-16":null"#));

    Command::cargo_bin("slots")
        .unwrap()
        .args(["best", "--compact", "--min-minutes", "45"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""overlapType":"most""#));
}

#[test]
fn best_file_to_file() {
    let output_path = std::env::temp_dir().join("slots-test-best-output.json");
    let _ = std::fs::remove_file(&output_path);

    Command::cargo_bin("slots")
        .unwrap()
        .args(["best", "-i", snapshot_path(), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    let value: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 3);

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn best_invalid_json_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .arg("best")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse availability snapshot"));
}

#[test]
fn best_missing_file_fails() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["best", "-i", "/nonexistent/snapshot.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// dates subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn dates_lists_window() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["dates", "--start", "2026-03-30", "--end", "2026-04-01"])
        .assert()
        .success()
        .stdout("2026-03-30\n2026-03-31\n2026-04-01\n");
}

#[test]
fn dates_rejects_long_window() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["dates", "--start", "2026-03-01", "--end", "2026-03-08"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 7"));
}

#[test]
fn dates_rejects_inverted_window() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["dates", "--start", "2026-03-08", "--end", "2026-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid group window"));
}

// ─────────────────────────────────────────────────────────────────────────────
// submit subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn submit_builds_one_record_per_date() {
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args([
            "submit", "--group", "g1", "--user", "alice", "--start", "2026-03-16", "--end",
            "2026-03-18", "-i", answers_path(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value = stdout_json(&output.stdout);
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["date"], "2026-03-16");
    assert_eq!(records[0]["startTime"], "09:00");
    assert_eq!(records[0]["endTime"], "12:00");
    assert_eq!(records[0]["dateId"], "g1:2026-03-16");
    assert_eq!(records[1]["startTime"], Value::Null);
    assert_eq!(records[2]["userId"], "alice");
    assert_eq!(records[2]["endTime"], Value::Null);
}

#[test]
fn submit_output_feeds_best() {
    let submitted = Command::cargo_bin("slots")
        .unwrap()
        .args([
            "submit", "--group", "g1", "--user", "alice", "--start", "2026-03-16", "--end",
            "2026-03-17", "-i", answers_path(),
        ])
        .output()
        .unwrap();
    assert!(submitted.status.success());

    Command::cargo_bin("slots")
        .unwrap()
        .args(["best", "--compact"])
        .write_stdin(submitted.stdout)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""2026-03-16":{"startTime":"09:00","endTime":"12:00","overlapType":"everyone","approxUsers":1}"#,
        ))
        .stdout(predicate::str::contains(r#""2026-03-17":null"#));
}

#[test]
fn submit_rejects_answers_outside_window() {
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "submit", "--group", "g1", "--user", "alice", "--start", "2026-03-17", "--end",
            "2026-03-18",
        ])
        .write_stdin(r#"{"2026-03-16":{"startTime":"09:00","endTime":"10:00"}}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the group window"));
}

#[test]
fn no_subcommand_shows_usage() {
    Command::cargo_bin("slots")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
