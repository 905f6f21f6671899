//! Integration tests for the `slots` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the day and first
//! subcommands through the actual binary, including file I/O, the
//! missing-data degrade policy, and input-error exit codes.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!(
        "{}/tests/fixtures/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    )
}

fn slots() -> Command {
    Command::cargo_bin("slots").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Day subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn day_prints_the_slot_grid() {
    slots()
        .args([
            "day",
            "--facility",
            "gate-7",
            "--date",
            "2026-03-16",
            "--mode",
            "live",
            "--rules",
            &fixture("rules.json"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"firstAvailable\": \"08:00\""))
        .stdout(predicate::str::contains("\"isBufferTime\""))
        .stdout(predicate::str::contains("\"16:00\""));
}

#[test]
fn day_reconciles_bookings() {
    slots()
        .args([
            "day",
            "--facility",
            "gate-7",
            "--date",
            "2026-03-16",
            "--mode",
            "live",
            "--rules",
            &fixture("rules.json"),
            "--bookings",
            &fixture("bookings.json"),
        ])
        .assert()
        .success()
        // Both 08:00 bookings exhaust the ceiling of 2, so the first two
        // candidates report "No available slots" and 09:00 is first free.
        .stdout(predicate::str::contains("No available slots"))
        .stdout(predicate::str::contains("\"firstAvailable\": \"09:00\""));
}

#[test]
fn day_short_circuits_on_holiday() {
    slots()
        .args([
            "day",
            "--facility",
            "gate-7",
            "--date",
            "2026-07-04",
            "--rules",
            &fixture("rules.json"),
            "--holidays",
            &fixture("holidays.json"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Organization Holiday"));
}

#[test]
fn day_compact_output() {
    slots()
        .args([
            "day",
            "--facility",
            "gate-7",
            "--date",
            "2026-03-16",
            "--rules",
            &fixture("rules.json"),
            "--compact",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"slots\":["));
}

#[test]
fn day_writes_to_output_file() {
    let output_path = "/tmp/slots-test-day-output.json";
    let _ = std::fs::remove_file(output_path);

    slots()
        .args([
            "day",
            "--facility",
            "gate-7",
            "--date",
            "2026-03-16",
            "--rules",
            &fixture("rules.json"),
            "-o",
            output_path,
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(content.contains("\"firstAvailable\""));

    let _ = std::fs::remove_file(output_path);
}

// ─────────────────────────────────────────────────────────────────────────────
// First subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn first_prints_the_first_available_time() {
    slots()
        .args([
            "first",
            "--facility",
            "gate-7",
            "--date",
            "2026-03-16",
            "--mode",
            "live",
            "--rules",
            &fixture("rules.json"),
            "--bookings",
            &fixture("bookings.json"),
        ])
        .assert()
        .success()
        .stdout(predicate::eq("09:00\n"));
}

#[test]
fn first_prints_none_when_no_rule_matches_the_weekday() {
    // 2026-03-17 is a Tuesday; the fixture rule covers Monday only.
    slots()
        .args([
            "first",
            "--facility",
            "gate-7",
            "--date",
            "2026-03-17",
            "--rules",
            &fixture("rules.json"),
        ])
        .assert()
        .success()
        .stdout(predicate::eq("none\n"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Upstream data policy
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unreadable_rules_file_fails_by_default() {
    slots()
        .args([
            "day",
            "--facility",
            "gate-7",
            "--date",
            "2026-03-16",
            "--rules",
            "/nonexistent/rules.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read rules file"));
}

#[test]
fn missing_data_empty_degrades_to_an_empty_day() {
    slots()
        .args([
            "first",
            "--facility",
            "gate-7",
            "--date",
            "2026-03-16",
            "--rules",
            "/nonexistent/rules.json",
            "--missing-data",
            "empty",
        ])
        .assert()
        .success()
        .stdout(predicate::eq("none\n"))
        .stderr(predicate::str::contains("treating unreadable rules as empty"));
}

#[test]
fn malformed_json_fails_even_when_degrading() {
    let path = "/tmp/slots-test-garbage-rules.json";
    std::fs::write(path, "this is not json {{{").unwrap();

    slots()
        .args([
            "day",
            "--facility",
            "gate-7",
            "--date",
            "2026-03-16",
            "--rules",
            path,
            "--missing-data",
            "empty",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse rules JSON"));

    let _ = std::fs::remove_file(path);
}

#[test]
fn malformed_time_in_rules_is_an_input_error() {
    let path = "/tmp/slots-test-bad-time-rules.json";
    std::fs::write(
        path,
        r#"[{"facilityId":"gate-7","startTime":"8am","endTime":"17:00"}]"#,
    )
    .unwrap();

    slots()
        .args([
            "day",
            "--facility",
            "gate-7",
            "--date",
            "2026-03-16",
            "--rules",
            path,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time of day"));

    let _ = std::fs::remove_file(path);
}

#[test]
fn invalid_date_is_an_input_error() {
    slots()
        .args([
            "day",
            "--facility",
            "gate-7",
            "--date",
            "16-03-2026",
            "--rules",
            &fixture("rules.json"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}
