//! Integration tests for argument handling of the `ticker` binary.
//!
//! These only cover paths that fail or finish before any network access.

use std::process::Command;

fn ticker_binary() -> String {
    env!("CARGO_BIN_EXE_ticker").to_string()
}

fn ticker() -> Command {
    let mut command = Command::new(ticker_binary());
    // Never reach the real service from tests.
    command
        .env("TICKSPOT_BASE_URL", "http://127.0.0.1:9")
        .env_remove("TICKSPOT_USERNAME")
        .env_remove("TICKSPOT_PASSWORD");
    command
}

#[test]
fn test_no_subcommand_prints_help() {
    let output = ticker().output().expect("failed to run ticker");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("list"));
    assert!(stdout.contains("start"));
    assert!(stdout.contains("create"));
}

#[test]
fn test_unknown_list_category_is_rejected() {
    let output = ticker()
        .args(["list", "entry"])
        .output()
        .expect("failed to run ticker");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"), "stderr: {stderr}");
}

#[test]
fn test_start_without_project_fails_fast() {
    let output = ticker()
        .args(["start", "-t", "14519343"])
        .output()
        .expect("failed to run ticker");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("project id is required"), "stderr: {stderr}");
}

#[test]
fn test_start_without_task_fails_fast() {
    let output = ticker()
        .args(["start", "-p", "1955215"])
        .output()
        .expect("failed to run ticker");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("task id is required"), "stderr: {stderr}");
}
