//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data directory
//! and verify outputs. Mutating steps run inside a single test so parallel
//! tests never race on the shared settings file.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "focusring-cli", "--"])
        .args(args)
        .env("FOCUSRING_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn parse_settings(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("Failed to parse settings JSON")
}

#[test]
fn help_lists_the_commands() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("start"));
    assert!(stdout.contains("settings"));
}

#[test]
fn start_help_documents_the_mode_flag() {
    let (stdout, _, code) = run_cli(&["start", "--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("--mode"));
    assert!(stdout.contains("short-break"));
}

#[test]
fn settings_show_emits_all_four_fields() {
    let (stdout, _, code) = run_cli(&["settings", "show"]);
    assert_eq!(code, 0, "settings show failed");

    let json = parse_settings(&stdout);
    for field in [
        "work_minutes",
        "short_break_minutes",
        "long_break_minutes",
        "rounds_per_long_break",
    ] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }
}

#[test]
fn settings_set_clamps_and_reset_restores() {
    // Out-of-range input lands on the range bounds.
    let (stdout, _, code) = run_cli(&["settings", "set", "--work", "500", "--rounds", "0"]);
    assert_eq!(code, 0, "settings set failed");
    let json = parse_settings(&stdout);
    assert_eq!(json["work_minutes"], 180);
    assert_eq!(json["rounds_per_long_break"], 1);

    // The clamped values persist across invocations.
    let (stdout, _, code) = run_cli(&["settings", "show"]);
    assert_eq!(code, 0);
    assert_eq!(parse_settings(&stdout)["work_minutes"], 180);

    // Fractional input truncates, untouched fields stay put.
    let (stdout, _, code) = run_cli(&["settings", "set", "--short-break", "7.9"]);
    assert_eq!(code, 0);
    let json = parse_settings(&stdout);
    assert_eq!(json["short_break_minutes"], 7);
    assert_eq!(json["work_minutes"], 180);

    // Reset returns the defaults.
    let (stdout, _, code) = run_cli(&["settings", "reset"]);
    assert_eq!(code, 0, "settings reset failed");
    let json = parse_settings(&stdout);
    assert_eq!(json["work_minutes"], 25);
    assert_eq!(json["short_break_minutes"], 5);
    assert_eq!(json["long_break_minutes"], 15);
    assert_eq!(json["rounds_per_long_break"], 4);
}

#[test]
fn unknown_subcommand_fails() {
    let (_, stderr, code) = run_cli(&["frobnicate"]);
    assert_ne!(code, 0);
    assert!(!stderr.is_empty());
}
