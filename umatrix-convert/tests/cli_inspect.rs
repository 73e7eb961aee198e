use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn inspect_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("umatrix-convert"))
}

#[test]
fn inspect_lists_sections_with_entry_counts() {
    inspect_cmd()
        .arg("inspect")
        .arg(fixture("fixtures/requestpolicy-settings.txt"))
        .arg("--source")
        .arg("request-policy")
        .assert()
        .success()
        .stdout(predicate::str::contains("format=request-policy"))
        .stdout(predicate::str::contains("[origins-to-destinations] 2 entries"))
        .stdout(predicate::str::contains("[destinations] 1 entry"))
        .stdout(predicate::str::contains("[origins] 1 entry"));
}

#[test]
fn inspect_verbose_lists_entries() {
    inspect_cmd()
        .arg("inspect")
        .arg(fixture("fixtures/requestpolicy-settings.txt"))
        .arg("--source")
        .arg("request-policy")
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("news.example -> cdn.example"))
        .stdout(predicate::str::contains("fonts.example"));
}

#[test]
fn inspect_emits_machine_readable_json() {
    let assert = inspect_cmd()
        .arg("inspect")
        .arg(fixture("fixtures/noscript-whitelist.txt"))
        .arg("--source")
        .arg("noscript")
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 stdout");
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid json report");
    assert_eq!(report["format"], "noscript");
    let sections = report["sections"].as_array().expect("sections array");
    assert!(sections.iter().any(|s| s["name"] == "UNTRUSTED"));
}

#[test]
fn inspect_reports_unreadable_input() {
    inspect_cmd()
        .arg("inspect")
        .arg("/nonexistent/export.txt")
        .arg("--source")
        .arg("noscript")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unreadable input"));
}
