//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with HOME pointed at a scratch directory so
//! the user's real configuration is never touched.

use std::process::Command;

/// Run a CLI command and return (code, stdout, stderr).
fn run_cli(home: &std::path::Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_fittrack-cli"))
        .args(args)
        .env("HOME", home)
        .env_remove("FITTRACK_ENV")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn scratch_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp HOME")
}

#[test]
fn test_catalog_list_json() {
    let home = scratch_home();
    let (code, stdout, _) = run_cli(home.path(), &["catalog", "list", "--json"]);
    assert_eq!(code, 0, "catalog list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(10));
}

#[test]
fn test_catalog_list_by_category() {
    let home = scratch_home();
    let (code, stdout, _) = run_cli(home.path(), &["catalog", "list", "--category", "upper"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Incline Push-ups"));
    assert!(!stdout.contains("Plank"));
}

#[test]
fn test_workout_plan_rest_day() {
    let home = scratch_home();
    let (code, stdout, _) = run_cli(home.path(), &["workout", "plan", "--day", "sun", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["type"], "Active Recovery");
    assert_eq!(parsed["exercises"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_workout_plan_text() {
    let home = scratch_home();
    let (code, stdout, _) = run_cli(home.path(), &["workout", "plan", "--day", "wed"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Wednesday - Lower Body & Waist Focus"));
    assert!(stdout.contains("40s WORK / 20s REST"));
}

#[test]
fn test_workout_plan_rejects_bad_day() {
    let home = scratch_home();
    let (code, _, stderr) = run_cli(home.path(), &["workout", "plan", "--day", "someday"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown weekday"));
}

#[test]
fn test_workout_run_completes() {
    let home = scratch_home();
    let (code, stdout, _) = run_cli(
        home.path(),
        &["workout", "run", "--day", "mon", "--tick-ms", "1"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("[1/7] Air Squat"));
    assert!(stdout.contains("Workout complete!"));
    assert!(stdout.contains("Session time 07:00, 7 / 60 min"));
}

#[test]
fn test_workout_run_rest_day() {
    let home = scratch_home();
    let (code, stdout, _) = run_cli(home.path(), &["workout", "run", "--day", "sunday"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Active Recovery Day"));
}

#[test]
fn test_habit_check() {
    let home = scratch_home();
    let (code, stdout, _) = run_cli(home.path(), &["habit", "check", "15"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("ok: 15 minutes"));

    let (code, _, stderr) = run_cli(home.path(), &["habit", "check", "1440"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("out of range"));

    let (code, _, _) = run_cli(home.path(), &["habit", "check", "-3"]);
    assert_ne!(code, 0);
}

#[test]
fn test_habit_stats_json() {
    let home = scratch_home();
    let (code, stdout, _) = run_cli(
        home.path(),
        &[
            "habit", "stats", "--json", "--today", "2026-03-11", "--metric", "minutes",
            "--log", "2026-03-11=20", "--log", "2026-03-11=5", "--log", "2026-03-09=30",
        ],
    );
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["stats"]["total_count"], 3);
    assert_eq!(parsed["stats"]["avg_minutes_per_day"], 28);
    assert_eq!(parsed["stats"]["max_sessions_per_day"], 2);
    let chart = parsed["chart"].as_array().unwrap();
    assert_eq!(chart.len(), 7);
    assert_eq!(chart[6]["label"], "Wed");
    assert_eq!(chart[6]["value"], 25);
    assert_eq!(chart[4]["value"], 30);

    let (code, stdout, _) = run_cli(home.path(), &["habit", "stats", "--range", "year"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Sessions: 0"));

    let (code, _, _) = run_cli(home.path(), &["habit", "stats", "--log", "2026-03-11=0"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_set_get_roundtrip() {
    let home = scratch_home();
    let (code, stdout, _) = run_cli(home.path(), &["config", "get", "timer.tick_interval_ms"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "1000");

    let (code, _, _) = run_cli(home.path(), &["config", "set", "progress.daily_goal_minutes", "30"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(home.path(), &["config", "get", "progress.daily_goal_minutes"]);
    assert_eq!(stdout.trim(), "30");

    let (code, _, _) = run_cli(home.path(), &["config", "set", "timer.bogus", "1"]);
    assert_ne!(code, 0);
}

#[test]
fn test_completions() {
    let home = scratch_home();
    let (code, stdout, _) = run_cli(home.path(), &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("fittrack-cli"));
}
