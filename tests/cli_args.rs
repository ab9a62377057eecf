//! Tests for CLI argument parsing and startup failures.
//!
//! These run the real binary. None of them reach the terminal UI: each one
//! exits during argument parsing or config loading.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn packlist_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_packlist"));
    cmd.env_remove("PACKLIST_LOG");
    cmd
}

#[test]
fn test_help_lists_options() {
    let output = packlist_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--sort"));
    assert!(stdout.contains("description"));
}

#[test]
fn test_version_flag() {
    let output = packlist_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_sort_is_rejected() {
    let output = packlist_cmd()
        .arg("--sort")
        .arg("weight")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("weight"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[form]\nmax_quantity = 0\n").expect("Failed to write config");

    let output = packlist_cmd()
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Config validation failed"),
        "Unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("missing.toml");

    let output = packlist_cmd()
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"));
}
