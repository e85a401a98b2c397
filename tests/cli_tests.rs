//! Integration tests for CLI functionality

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get path to compiled binary
fn meshctl_bin() -> &'static Path {
    assert_cmd::cargo::cargo_bin!("meshctl")
}

/// Command with an isolated config file and no context env override
fn meshctl(config: &Path) -> Command {
    let mut cmd = Command::new(meshctl_bin());
    cmd.arg("--config")
        .arg(config)
        .env_remove("MESHCTL_CONTEXT")
        .env_remove("RUST_LOG");
    cmd
}

fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("config.yaml")
}

fn seed_local_context(config: &Path) {
    meshctl(config)
        .args(["context", "set", "local", "--endpoint", "http://localhost:9081"])
        .assert()
        .success();
}

#[test]
fn test_help_flag() {
    Command::new(meshctl_bin())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Manage tokens and contexts"));
}

#[test]
fn test_invalid_token_subcommand() {
    let dir = TempDir::new().unwrap();
    meshctl(&config_path(&dir))
        .args(["token", "rename", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_create_then_list() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);

    meshctl(&config)
        .args(["token", "create", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token foo created."));

    meshctl(&config)
        .args(["token", "list"])
        .assert()
        .success()
        .stdout(predicate::eq("Available tokens:\nfoo\n"));

    let content = std::fs::read_to_string(&config).unwrap();
    assert!(content.contains("location: auth.json"));
}

#[test]
fn test_create_duplicate_fails() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);

    meshctl(&config).args(["token", "create", "foo"]).assert().success();
    meshctl(&config)
        .args(["token", "create", "foo", "-f", "other.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_view_delete_scenario() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);

    meshctl(&config)
        .args(["token", "create", "foo", "--filepath", "/tmp/foo.json"])
        .assert()
        .success();

    meshctl(&config)
        .args(["token", "view", "foo"])
        .assert()
        .success()
        .stdout(predicate::eq("token: foo\nlocation: /tmp/foo.json\n"));

    meshctl(&config)
        .args(["token", "delete", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token foo deleted."));

    meshctl(&config)
        .args(["token", "view", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Token foo could not be found."));
}

#[test]
fn test_delete_missing_token_fails() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);

    meshctl(&config).args(["token", "create", "foo"]).assert().success();
    let before = std::fs::read_to_string(&config).unwrap();

    meshctl(&config)
        .args(["token", "delete", "bar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Could not delete token \"bar\" from config",
        ));

    assert_eq!(std::fs::read_to_string(&config).unwrap(), before);
}

#[test]
fn test_set_uses_current_context_and_view_shows_it() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);
    seed_local_context(&config);

    meshctl(&config).args(["token", "create", "foo"]).assert().success();
    meshctl(&config)
        .args(["token", "set", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token foo set for context local"));

    meshctl(&config)
        .args(["token", "view"])
        .assert()
        .success()
        .stdout(predicate::eq("token: foo\nlocation: auth.json\n"))
        .stderr(predicate::str::contains(
            "Token unspecified. Displaying token for current context \"local\"",
        ));
}

#[test]
fn test_set_context_from_env_var() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);
    seed_local_context(&config);
    meshctl(&config)
        .args(["context", "set", "remote", "--endpoint", "https://mesh.example.com"])
        .assert()
        .success();
    meshctl(&config).args(["token", "create", "foo"]).assert().success();

    meshctl(&config)
        .env("MESHCTL_CONTEXT", "remote")
        .args(["token", "set", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("set for context remote"));
}

#[test]
fn test_view_without_assignment_fails() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);
    seed_local_context(&config);
    meshctl(&config).args(["token", "create", "foo"]).assert().success();

    meshctl(&config)
        .args(["token", "view"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Could not get token for the current context",
        ));
}

#[test]
fn test_view_all() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);
    meshctl(&config).args(["token", "create", "foo"]).assert().success();
    meshctl(&config)
        .args(["token", "create", "bar", "-f", "bar.json"])
        .assert()
        .success();

    meshctl(&config)
        .args(["token", "view", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "-> token: foo\n   location: auth.json",
        ))
        .stdout(predicate::str::contains(
            "-> token: bar\n   location: bar.json",
        ));
}

#[test]
fn test_list_json_output() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);
    meshctl(&config).args(["token", "create", "foo"]).assert().success();

    let output = meshctl(&config)
        .args(["token", "list", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let names: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(names, vec!["foo"]);
}

#[test]
fn test_delete_assigned_token_clears_context() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);
    seed_local_context(&config);
    meshctl(&config).args(["token", "create", "foo"]).assert().success();
    meshctl(&config).args(["token", "set", "foo"]).assert().success();

    meshctl(&config)
        .args(["token", "delete", "foo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("assignment has been cleared"));

    meshctl(&config)
        .args(["context", "current"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token:    <not set>"));
}

#[test]
fn test_corrupt_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);
    std::fs::write(&config, "tokens: [unterminated").unwrap();

    meshctl(&config)
        .args(["token", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_create_empty_name_rejected() {
    let dir = TempDir::new().unwrap();
    let config = config_path(&dir);

    meshctl(&config)
        .args(["token", "create", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
    assert!(!config.exists());
}
