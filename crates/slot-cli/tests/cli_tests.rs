//! Integration tests for the `slots` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise every subcommand
//! through the actual binary, including stdin input, file input, config files,
//! environment overrides, JSON output, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the two-day schedule fixture.
fn schedule_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/schedule.json")
}

/// Helper: path to a fixture whose timeslots overlap.
fn overlapping_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/overlapping.json")
}

/// Helper: path to a one-day fixture with busy 11:00-12:00 and 14:00-15:00.
fn busy_day_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/busy_day.json")
}

/// Helper: a `slots` command isolated from the user's environment.
fn slots() -> Command {
    let mut cmd = Command::cargo_bin("slots").unwrap();
    cmd.env_remove("SLOTS_FORMAT")
        .env_remove("SLOTS_SCHEDULE_PATH")
        .env_remove("RUST_LOG");
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// busy / free
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn busy_from_file() {
    slots()
        .args(["busy", "--date", "2024-10-10", "-i", schedule_path()])
        .assert()
        .success()
        .stdout("11:00-12:00\n");
}

#[test]
fn busy_are_sorted() {
    slots()
        .args(["busy", "--date", "2024-10-14", "-i", busy_day_path()])
        .assert()
        .success()
        .stdout("11:00-12:00\n14:00-15:00\n");
}

#[test]
fn free_from_stdin() {
    let input = std::fs::read_to_string(schedule_path()).unwrap();
    slots()
        .args(["free", "--date", "2024-10-11"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("08:00-09:30\n16:00-17:00\n");
}

#[test]
fn free_for_busy_day() {
    slots()
        .args(["free", "--date", "2024-10-14", "-i", busy_day_path()])
        .assert()
        .success()
        .stdout("09:00-11:00\n12:00-14:00\n15:00-18:00\n");
}

#[test]
fn free_as_json() {
    let output = slots()
        .args(["--format", "json", "free", "--date", "2024-10-10", "-i", schedule_path()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"start": "09:00", "end": "11:00"},
            {"start": "12:00", "end": "18:00"}
        ])
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// available
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn available_inside_free_slot() {
    slots()
        .args(["available", "--date", "2024-10-14", "--start", "12:00", "--end", "13:00"])
        .args(["-i", busy_day_path()])
        .assert()
        .success()
        .stdout("available\n");
}

#[test]
fn unavailable_when_crossing_busy_slot() {
    slots()
        .args(["available", "--date", "2024-10-14", "--start", "10:00", "--end", "11:30"])
        .args(["-i", busy_day_path()])
        .assert()
        .success()
        .stdout("unavailable\n");
}

#[test]
fn available_as_json() {
    slots()
        .args(["--format", "json", "available", "--date", "2024-10-10"])
        .args(["--start", "10:00", "--end", "10:30", "-i", schedule_path()])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn available_rejects_inverted_range() {
    slots()
        .args(["available", "--date", "2024-10-10", "--start", "13:00", "--end", "12:00"])
        .args(["-i", schedule_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid interval"));
}

#[test]
fn available_rejects_malformed_time() {
    slots()
        .args(["available", "--date", "2024-10-10", "--start", "9:00", "--end", "12:00"])
        .args(["-i", schedule_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --start"));
}

// ─────────────────────────────────────────────────────────────────────────────
// find
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn find_first_fitting_slot() {
    slots()
        .args(["find", "--date", "2024-10-14", "--duration", "30", "-i", busy_day_path()])
        .assert()
        .success()
        .stdout("09:00-09:30\n");

    slots()
        .args(["find", "--date", "2024-10-10", "--duration", "150", "-i", schedule_path()])
        .assert()
        .success()
        .stdout("12:00-14:30\n");
}

#[test]
fn find_not_found_is_not_a_failure() {
    slots()
        .args(["find", "--date", "2024-10-14", "--duration", "600", "-i", busy_day_path()])
        .assert()
        .success()
        .stdout("no free slot of 600 minutes on 2024-10-14\n");
}

#[test]
fn find_as_json() {
    let output = slots()
        .args(["--format", "json", "find", "--date", "2024-10-14", "--duration", "45"])
        .args(["-i", busy_day_path()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({"start": "09:00", "end": "09:45"}));

    slots()
        .args(["--format", "json", "find", "--date", "2024-10-14", "--duration", "600"])
        .args(["-i", busy_day_path()])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn find_rejects_non_positive_duration() {
    slots()
        .args(["find", "--date", "2024-10-14", "--duration", "0", "-i", busy_day_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));

    slots()
        .args(["find", "--date", "2024-10-14", "--duration", "-30", "-i", busy_day_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
}

// ─────────────────────────────────────────────────────────────────────────────
// dates
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn dates_lists_known_dates() {
    slots()
        .args(["dates", "-i", schedule_path()])
        .assert()
        .success()
        .stdout("2024-10-10\n2024-10-11\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unknown_date_fails() {
    slots()
        .args(["free", "--date", "2024-10-12", "-i", schedule_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in the schedule"));
}

#[test]
fn malformed_date_fails() {
    slots()
        .args(["free", "--date", "12.10.2024", "-i", schedule_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn overlapping_timeslots_fail() {
    slots()
        .args(["busy", "--date", "2024-10-10", "-i", overlapping_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Data integrity error"));
}

#[test]
fn invalid_json_fails() {
    slots()
        .args(["busy", "--date", "2024-10-10"])
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse schedule document"));
}

#[test]
fn missing_input_file_fails() {
    slots()
        .args(["busy", "--date", "2024-10-10", "-i", "/nonexistent/schedule.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn config_file_supplies_input_and_format() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "schedule_path = {:?}", schedule_path()).unwrap();
    writeln!(config, "format = \"json\"").unwrap();

    slots()
        .args(["--config"])
        .arg(config.path())
        .args(["dates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"2024-10-10\""))
        .stdout(predicate::str::contains("\"2024-10-11\""));
}

#[test]
fn format_flag_overrides_config() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "format = \"json\"").unwrap();

    slots()
        .args(["--config"])
        .arg(config.path())
        .args(["--format", "text", "busy", "--date", "2024-10-10", "-i", schedule_path()])
        .assert()
        .success()
        .stdout("11:00-12:00\n");
}

#[test]
fn environment_supplies_input_path() {
    slots()
        .env("SLOTS_SCHEDULE_PATH", busy_day_path())
        .env("SLOTS_FORMAT", "text")
        .args(["busy", "--date", "2024-10-14"])
        .assert()
        .success()
        .stdout("11:00-12:00\n14:00-15:00\n");
}

#[test]
fn verbose_logs_to_stderr_only() {
    slots()
        .args(["-v", "busy", "--date", "2024-10-10", "-i", schedule_path()])
        .assert()
        .success()
        .stdout("11:00-12:00\n")
        .stderr(predicate::str::contains("built day schedule"));
}

#[test]
fn help_lists_subcommands() {
    slots()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("busy"))
        .stdout(predicate::str::contains("free"))
        .stdout(predicate::str::contains("available"))
        .stdout(predicate::str::contains("find"));
}
