//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. The backend
//! is not running here: remote failures must degrade silently, so every
//! read-only command still succeeds on default state.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "prospect-cli", "--"])
        .args(args)
        .env("PROSPECT_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_status_without_backend() {
    let (stdout, _, code) = run_cli(&["status"]);
    assert_eq!(code, 0, "status failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("status must be JSON");
    assert_eq!(parsed["snapshot"]["type"], "StateSnapshot");
    assert!(parsed["progress"].as_array().is_some());
}

#[test]
fn test_log_unknown_category_fails() {
    let (_, stderr, code) = run_cli(&["log", "telepathy"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown action category"));
}

#[test]
fn test_post_unknown_category_fails() {
    let (_, stderr, code) = run_cli(&["post", "poetry"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown post category"));
}

#[test]
fn test_config_get() {
    let (stdout, _, code) = run_cli(&["config", "get", "sync.debounce_ms"]);
    assert_eq!(code, 0, "config get failed");
    assert!(!stdout.trim().is_empty());
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_, _, code) = run_cli(&["config", "get", "sync.nonexistent"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(stdout.contains("[server]"));
    assert!(stdout.contains("[sync]"));
}

#[test]
fn test_completions_bash() {
    let (stdout, _, code) = run_cli(&["completions", "bash"]);
    assert_eq!(code, 0, "completions failed");
    assert!(stdout.contains("prospect"));
}
