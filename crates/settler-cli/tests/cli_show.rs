use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn settler_cmd() -> Command {
    Command::cargo_bin("settler").unwrap()
}

#[test]
fn test_show_without_properties_fails() {
    let tmp = TempDir::new().unwrap();

    settler_cmd()
        .current_dir(tmp.path())
        .args(["show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find local.properties"));
}

#[test]
fn test_show_missing_sdk_key_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("local.properties"), "sdk.dir=/opt/android\n").unwrap();

    settler_cmd()
        .current_dir(tmp.path())
        .args(["show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("flutter.sdk not set"));
}

#[test]
fn test_show_prints_evaluated_settings() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("local.properties"),
        "flutter.sdk=/opt/flutter\n",
    )
    .unwrap();

    settler_cmd()
        .current_dir(tmp.path())
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("smart_plug"))
        .stdout(predicate::str::contains("include :app"))
        .stdout(predicate::str::contains("/opt/flutter/packages/flutter_tools/gradle"))
        .stdout(predicate::str::contains("prefer-settings"))
        .stdout(predicate::str::contains("dev.flutter.flutter-plugin-loader"));
}

#[test]
fn test_show_json_is_parseable() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("local.properties"), "flutter.sdk=/sdk\n").unwrap();

    let output = settler_cmd()
        .current_dir(tmp.path())
        .args(["show", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["sdk_path"], "/sdk");
    assert_eq!(json["root_project"], "smart_plug");
}

#[test]
fn test_show_honors_project_dir_flag() {
    let tmp = TempDir::new().unwrap();
    let project = tmp.path().join("host");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("local.properties"), "flutter.sdk=/sdk\n").unwrap();

    settler_cmd()
        .current_dir(tmp.path())
        .args(["show", "--project-dir"])
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("/sdk"));
}
