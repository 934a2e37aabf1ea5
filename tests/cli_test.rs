//! End-to-end tests for the cohere-plugin binary against a scratch home
//! directory.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn plugin_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cohere-plugin").expect("binary should build");
    cmd.arg("--home").arg(home).env_remove("RUST_LOG");
    cmd
}

fn config_path(home: &Path) -> std::path::PathBuf {
    home.join(".command").join("config")
}

fn import_json(home: &Path) -> Value {
    let output = plugin_cmd(home)
        .args(["import", "-o", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    serde_json::from_slice(&output).expect("import output should be JSON")
}

#[test]
fn provision_then_import_round_trips() {
    let home = TempDir::new().unwrap();

    plugin_cmd(home.path())
        .args([
            "provision",
            "--field",
            "JWT=abc123",
            "--field",
            "Email=a@b.com",
            "--field",
            "URL=https://api.cohere.ai",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let report = import_json(home.path());
    let fields = &report[0]["candidates"][0]["fields"];

    assert_eq!(fields["URL"], "https://api.cohere.ai");
    assert_eq!(fields["JWT"], "abc123");
    assert_eq!(fields["Email"], "a@b.com");
    assert_eq!(report[0]["errors"].as_array().unwrap().len(), 0);
}

#[test]
fn provision_without_jwt_writes_nothing() {
    let home = TempDir::new().unwrap();

    plugin_cmd(home.path())
        .args(["provision", "--field", "URL=https://api.cohere.ai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to provision"))
        .stderr(predicate::str::contains("required field missing"));

    assert!(!config_path(home.path()).exists());
}

#[test]
fn provision_to_stdout_prints_config() {
    let home = TempDir::new().unwrap();

    plugin_cmd(home.path())
        .args(["provision", "--stdout", "--field", "JWT=abc123"])
        .assert()
        .success()
        .stdout(r#"{"CurrentURL":"","Contexts":{"":{"JWT":"abc123","Email":""}}}"#.to_owned() + "\n");

    assert!(!config_path(home.path()).exists());
}

#[test]
fn provision_reads_env_file() {
    let home = TempDir::new().unwrap();
    let env_file = home.path().join("cohere.env");
    fs::write(&env_file, "COHERE_JWT=from-env\nCOHERE_URL=https://api.cohere.ai\n").unwrap();

    plugin_cmd(home.path())
        .args(["provision", "--field", "Email=a@b.com", "--env-file"])
        .arg(&env_file)
        .assert()
        .success();

    let report = import_json(home.path());
    let fields = &report[0]["candidates"][0]["fields"];
    assert_eq!(fields["JWT"], "from-env");
    assert_eq!(fields["Email"], "a@b.com");
}

#[test]
fn import_reports_malformed_config_without_failing() {
    let home = TempDir::new().unwrap();
    let path = config_path(home.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();

    let report = import_json(home.path());

    assert_eq!(report[0]["candidates"].as_array().unwrap().len(), 0);
    assert_eq!(report[0]["errors"].as_array().unwrap().len(), 1);
}

#[test]
fn import_text_masks_jwt() {
    let home = TempDir::new().unwrap();
    let path = config_path(home.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"{"CurrentURL":"https://api.cohere.ai","Contexts":{"https://api.cohere.ai":{"JWT":"abc123","Email":"a@b.com"}}}"#,
    )
    .unwrap();

    plugin_cmd(home.path())
        .arg("import")
        .assert()
        .success()
        .stdout(predicate::str::contains("a@b.com"))
        .stdout(predicate::str::contains("abc123").not());
}

#[test]
fn import_with_no_config_finds_nothing() {
    let home = TempDir::new().unwrap();

    plugin_cmd(home.path())
        .args(["import", "-o", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("candidates: []"));
}

#[test]
fn deprovision_removes_config() {
    let home = TempDir::new().unwrap();

    plugin_cmd(home.path())
        .args(["provision", "--field", "JWT=abc123"])
        .assert()
        .success();
    assert!(config_path(home.path()).exists());

    plugin_cmd(home.path()).arg("deprovision").assert().success();
    assert!(!config_path(home.path()).exists());
}

#[test]
fn schema_lists_fields() {
    let home = TempDir::new().unwrap();

    plugin_cmd(home.path())
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("JWT"))
        .stdout(predicate::str::contains("https://dashboard.cohere.ai/"));
}

#[test]
fn rejects_unknown_field() {
    let home = TempDir::new().unwrap();

    plugin_cmd(home.path())
        .args(["provision", "--field", "TOKEN=abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid field 'TOKEN=abc'"));
}
