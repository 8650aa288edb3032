//! Smoke tests for the built binary's argument handling.

use std::process::Command;

fn cinedeck_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cinedeck"))
}

#[test]
fn test_help_lists_options() {
    let output = cinedeck_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--page"));
    assert!(stdout.contains("--movie"));
}

#[test]
fn test_version_flag() {
    let output = cinedeck_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_page_is_rejected() {
    let output = cinedeck_cmd()
        .args(["--page", "settings"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("settings"));
}

#[test]
fn test_bad_config_file_exits_with_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nbase_url = \"not a url\"\n").unwrap();

    let output = cinedeck_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load configuration"));
}
