//! Offline simulate command tests.
//!
//! These drive the installed binary against tempdir-built template
//! directories and check both the resolved output and the structured exit
//! codes for configuration errors.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn write_template(dir: &Path, kind: &str, name: &str, body: &serde_json::Value) {
    let subdir = dir.join(kind);
    fs::create_dir_all(&subdir).unwrap();
    fs::write(
        subdir.join(format!("{name}.json")),
        serde_json::to_string_pretty(body).unwrap(),
    )
    .unwrap();
}

fn templatectl() -> Command {
    Command::cargo_bin("templatectl").unwrap()
}

#[test]
fn test_simulate_resolves_composed_templates() {
    let dir = tempfile::tempdir().unwrap();

    write_template(
        dir.path(),
        "component_templates",
        "shards-one",
        &serde_json::json!({
            "template": { "settings": { "index": { "number_of_shards": 1 } } }
        }),
    );
    write_template(
        dir.path(),
        "component_templates",
        "shards-three",
        &serde_json::json!({
            "template": { "settings": { "index": { "number_of_shards": 3 } } }
        }),
    );
    write_template(
        dir.path(),
        "index_templates",
        "logs",
        &serde_json::json!({
            "index_patterns": ["logs-*"],
            "composed_of": ["shards-one", "shards-three"],
            "priority": 100
        }),
    );

    templatectl()
        .args(["simulate", "logs-2026.08", "--templates"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"template_name\": \"logs\""))
        .stdout(predicate::str::contains("\"number_of_shards\": 3"));
}

#[test]
fn test_simulate_without_match_prints_null() {
    let dir = tempfile::tempdir().unwrap();
    write_template(
        dir.path(),
        "index_templates",
        "metrics",
        &serde_json::json!({ "index_patterns": ["metrics-*"] }),
    );

    templatectl()
        .args(["simulate", "logs-1", "--templates"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("null"));
}

#[test]
fn test_simulate_priority_tie_exits_with_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    write_template(
        dir.path(),
        "index_templates",
        "first",
        &serde_json::json!({ "index_patterns": ["logs-*"], "priority": 7 }),
    );
    write_template(
        dir.path(),
        "index_templates",
        "second",
        &serde_json::json!({ "index_patterns": ["logs-2026*"], "priority": 7 }),
    );

    templatectl()
        .args(["simulate", "logs-2026", "--templates"])
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("multiple index templates match"));
}

#[test]
fn test_simulate_missing_component_exits_with_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    write_template(
        dir.path(),
        "index_templates",
        "logs",
        &serde_json::json!({
            "index_patterns": ["logs-*"],
            "composed_of": ["gone"]
        }),
    );

    templatectl()
        .args(["simulate", "logs-1", "--templates"])
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing component template 'gone'"));
}

#[test]
fn test_simulate_missing_directory_fails() {
    templatectl()
        .args(["simulate", "logs-1", "--templates", "no/such/dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_simulate_unparsable_template_is_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let subdir = dir.path().join("index_templates");
    fs::create_dir_all(&subdir).unwrap();
    fs::write(subdir.join("broken.json"), "{ not json").unwrap();

    templatectl()
        .args(["simulate", "logs-1", "--templates"])
        .arg(dir.path())
        .assert()
        .code(5)
        .stderr(predicate::str::contains("parsing index template 'broken'"));
}
