//! Command-line behavior of the `colorpath` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn colorpath() -> Command {
    Command::cargo_bin("colorpath").unwrap()
}

#[test]
fn help_lists_walk_options() {
    colorpath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--half-width"))
        .stdout(predicate::str::contains("--summary"));
}

#[test]
fn summary_shows_color_properties() {
    colorpath()
        .args(["--summary", "--seed", "3", "--steps", "200", "--title", "Demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TitleText: 'Demo'"))
        .stdout(predicate::str::contains("ColorData: [1x200 f64]"))
        .stdout(predicate::str::contains("ColorbarLabel: 'heat'"))
        .stdout(predicate::str::contains("XData").not());
}

#[test]
fn summary_with_index_coloring_shows_coordinates() {
    colorpath()
        .args(["--summary", "--steps", "50", "--index-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("XData: [1x50 f64]"))
        .stdout(predicate::str::contains("YData: [1x50 f64]"))
        .stdout(predicate::str::contains("ColorData").not());
}

#[test]
fn manual_limits_appear_in_summary() {
    colorpath()
        .args(["--summary", "--steps", "20", "--clim", "-1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ColorLimits: [-1 2]"));
}

#[test]
fn rejects_decreasing_limits() {
    colorpath()
        .args(["--summary", "--steps", "20", "--clim", "2", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color limits"));
}

#[test]
fn rejects_unknown_limits_mode() {
    colorpath()
        .args(["--summary", "--steps", "20", "--limits-mode", "fixed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 'auto' or 'manual'"));
}

#[test]
fn rejects_undamped_walk() {
    colorpath()
        .args(["--summary", "--steps", "2000", "--damping", "1.5"])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure()
        .stderr(predicate::str::contains("damping must lie in [0, 1]"));
}

#[test]
fn rejects_unknown_palette() {
    colorpath()
        .args(["--summary", "--palette", "jet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown palette"));
}

#[test]
fn log_file_records_run() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("colorpath.log");

    colorpath()
        .args(["--summary", "--steps", "30", "--log"])
        .arg(&log)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting Colorpath"));
    assert!(contents.contains("Generated random walk"));
}
