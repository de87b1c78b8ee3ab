//! CLI integration tests

use std::process::Command;

fn clipstack_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_clipstack"))
}

#[test]
fn help_output() {
    let output = clipstack_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("clipboard"));
    assert!(stdout.contains("--poll-interval"));
    assert!(stdout.contains("--capacity"));
    assert!(stdout.contains("--history-file"));
    assert!(stdout.contains("--paste-tool"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("daemon"));
}

#[test]
fn version_output() {
    let output = clipstack_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("clipstack"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let output = clipstack_bin()
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("clipstack"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let output = clipstack_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn daemon_help() {
    let output = clipstack_bin()
        .args(["daemon", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("status"));
    assert!(stdout.contains("history"));
    assert!(stdout.contains("menu"));
    assert!(stdout.contains("copy"));
    assert!(stdout.contains("paste"));
    assert!(stdout.contains("show"));
    assert!(stdout.contains("clear"));
    assert!(stdout.contains("stop"));
}
