//! Tests for error handling, suggestions and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn conceptual(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("conceptual").unwrap();
    cmd.current_dir(dir.path())
        .env("CONCEPTUAL_KIT_HOME", dir.path().join("kit"))
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG")
        .env_remove("CONCEPTUAL_CONFIG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_unknown_subcommand_exits_two() {
    let tmp = TempDir::new().unwrap();
    conceptual(&tmp).arg("frobnicate").assert().code(2);
}

#[test]
fn test_unknown_assistant_exits_two() {
    let tmp = TempDir::new().unwrap();
    conceptual(&tmp)
        .args(["init", "x", "--ai", "clippy"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("claude"));

    assert!(!tmp.path().join("x").exists());
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let tmp = TempDir::new().unwrap();
    conceptual(&tmp).args(["-q", "-v", "version"]).assert().code(2);
}

#[test]
fn test_missing_name_suggests_here() {
    let tmp = TempDir::new().unwrap();
    conceptual(&tmp)
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Project name required"))
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("--here"));
}

#[test]
fn test_parent_directory_name_rejected() {
    let tmp = TempDir::new().unwrap();
    conceptual(&tmp)
        .args(["init", "..", "--no-git"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn test_unknown_config_key_exits_four() {
    let tmp = TempDir::new().unwrap();
    conceptual(&tmp)
        .args(["config", "get", "does.not.exist"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_missing_explicit_config_exits_four() {
    let tmp = TempDir::new().unwrap();
    conceptual(&tmp)
        .args(["--config", "absent.toml", "version"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_bad_configured_assistant_exits_four() {
    let tmp = TempDir::new().unwrap();
    conceptual(&tmp)
        .args(["init", "x", "--no-git"])
        .env("CONCEPTUAL__DEFAULTS__AI", "clippy")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("defaults.ai"));

    assert!(!tmp.path().join("x").exists());
}

#[test]
fn test_verbose_hint_hidden_with_verbose() {
    let tmp = TempDir::new().unwrap();
    conceptual(&tmp)
        .args(["-v", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}
