//! Integration tests for the `ql-cli` command-line interface.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn ql() -> Command {
    Command::cargo_bin("ql").unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_success_prints_a_value() {
    ql().args(["roll", "success", "--seed", "42"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("success roll").and(predicate::str::contains("3-6")),
        );
}

#[test]
fn roll_failure_prints_a_value() {
    ql().args(["roll", "failure", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1-2"));
}

#[test]
fn roll_many_prints_a_histogram() {
    ql().args(["roll", "success", "-n", "600", "--seed", "7"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Value")
                .and(predicate::str::contains("Share"))
                .and(predicate::str::contains("600 success rolls")),
        );
}

#[test]
fn roll_is_deterministic_for_a_seed() {
    let first = ql()
        .args(["roll", "success", "-n", "10", "--seed", "99"])
        .assert()
        .success();
    let second = ql()
        .args(["roll", "success", "-n", "10", "--seed", "99"])
        .assert()
        .success();
    assert_eq!(
        first.get_output().stdout,
        second.get_output().stdout
    );
}

#[test]
fn roll_rejects_unknown_mode() {
    ql().args(["roll", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown mode"));
}

#[test]
fn roll_rejects_zero_count() {
    ql().args(["roll", "success", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("count must be at least 1"));
}

// ---------------------------------------------------------------------------
// odds
// ---------------------------------------------------------------------------

#[test]
fn odds_lists_both_modes() {
    ql().arg("odds")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("success")
                .and(predicate::str::contains("failure"))
                .and(predicate::str::contains("3-6"))
                .and(predicate::str::contains("1-2"))
                .and(predicate::str::contains("P(4)=2/6")),
        );
}

// ---------------------------------------------------------------------------
// board
// ---------------------------------------------------------------------------

#[test]
fn board_prints_start_and_finish() {
    ql().args(["board", "--days", "30"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("START")
                .and(predicate::str::contains("FINISH!"))
                .and(predicate::str::contains("31 tiles")),
        );
}

#[test]
fn board_marks_the_requested_day() {
    ql().args(["board", "--days", "30", "--day", "14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marker at day 14"));
}

#[test]
fn board_clamps_an_out_of_range_day() {
    ql().args(["board", "--days", "10", "--day", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marker at day 10"));
}

#[test]
fn board_rejects_zero_days() {
    ql().args(["board", "--days", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one day"));
}
