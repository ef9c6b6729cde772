use std::fs;

use assert_cmd::Command;
use custmap_testing::fixtures::{self, FixturePaths};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn setup() -> (TempDir, FixturePaths) {
    let dir = TempDir::new().expect("temp dir");
    let paths = fixtures::write_input_files(dir.path()).expect("fixture files");
    (dir, paths)
}

fn custmap(paths: &FixturePaths) -> Command {
    let mut cmd = Command::cargo_bin("custmap").expect("binary built");
    cmd.arg("--data")
        .arg(&paths.dataset)
        .arg("--reference")
        .arg(&paths.reference)
        .arg("--colors")
        .arg(&paths.colors);
    cmd
}

#[test]
fn scenarios_lists_the_dataset() {
    let (_dir, paths) = setup();
    custmap(&paths)
        .arg("scenarios")
        .assert()
        .success()
        .stdout(predicate::str::contains("Global manufacturer"))
        .stdout(predicate::str::contains("Retail chain"))
        .stdout(predicate::str::contains("Anonymous contacts"));
}

#[test]
fn scenarios_respects_filters() {
    let (_dir, paths) = setup();
    custmap(&paths)
        .arg("scenarios")
        .args(["--customer-type", "STRATEGIC_CUSTOMERS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Global manufacturer"))
        .stdout(predicate::str::contains("Retail chain").not());
}

#[test]
fn show_prints_the_hierarchy_outline() {
    let (_dir, paths) = setup();
    custmap(&paths)
        .args(["show", "Global manufacturer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GLOBAL_CUSTOMER"))
        .stdout(predicate::str::contains("Aurora Group"))
        .stdout(predicate::str::contains("[-]"));
}

#[test]
fn show_collapse_all_flips_the_affixes() {
    let (_dir, paths) = setup();
    custmap(&paths)
        .args(["show", "Global manufacturer", "--collapse-all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[+]"))
        .stdout(predicate::str::contains("CONTACT").not());
}

#[test]
fn layout_emits_a_positioned_scene_as_json() {
    let (_dir, paths) = setup();
    let output = custmap(&paths)
        .args(["layout", "Global manufacturer", "--format", "json"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let nodes = value["scene"]["nodes"].as_array().expect("nodes array");
    assert!(!nodes.is_empty());
    for node in nodes {
        assert!(node["x"].is_number());
        assert!(node["y"].is_number());
        assert!(node["key"].is_string());
    }
    let edges = value["scene"]["edges"].as_array().expect("edges array");
    assert_eq!(edges.len(), nodes.len() - 1);
}

#[test]
fn layout_hide_excludes_a_kind_entirely() {
    let (_dir, paths) = setup();
    let output = custmap(&paths)
        .args([
            "layout",
            "Global manufacturer",
            "--hide",
            "CONTACT",
            "--format",
            "json",
        ])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let nodes = value["scene"]["nodes"].as_array().expect("nodes array");
    assert!(nodes.iter().all(|node| node["kind"] != "CONTACT"));
}

#[test]
fn layout_fit_includes_the_transform() {
    let (_dir, paths) = setup();
    let output = custmap(&paths)
        .args([
            "layout",
            "Global manufacturer",
            "--fit",
            "1280x720",
            "--format",
            "json",
        ])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let scale = value["fit"]["scale"].as_f64().expect("fit computed");
    assert!(scale > 0.0);
}

#[test]
fn layout_supports_horizontal_orientation() {
    let (_dir, paths) = setup();
    custmap(&paths)
        .args([
            "layout",
            "Global manufacturer",
            "--orientation",
            "horizontal",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("HORIZONTAL"));
}

#[test]
fn inspect_shows_classification_and_meaning() {
    let (_dir, paths) = setup();
    custmap(&paths)
        .args(["inspect", "Retail chain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("customerType: RELATIONSHIP_CUSTOMERS"))
        .stdout(predicate::str::contains("Telesales"))
        .stdout(predicate::str::contains("mdmCustomerId"));
}

#[test]
fn inspect_resolves_a_node_by_key() {
    let (_dir, paths) = setup();
    custmap(&paths)
        .args([
            "inspect",
            "Global manufacturer",
            "--node",
            "CONTACT:CP-1@ACCOUNT:ACC-GLOB-1#0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("CP-1"))
        .stdout(predicate::str::contains("Logistics Lead"));
}

#[test]
fn inspect_rejects_unknown_node_keys() {
    let (_dir, paths) = setup();
    custmap(&paths)
        .args(["inspect", "Retail chain", "--node", "CONTACT:NOPE@X#0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown node key"));
}

#[test]
fn unknown_scenario_is_an_error() {
    let (_dir, paths) = setup();
    custmap(&paths)
        .args(["show", "No such scenario"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown scenario"));
}

#[test]
fn missing_dataset_is_fatal() {
    let (_dir, paths) = setup();
    fs::remove_file(&paths.dataset).expect("remove dataset");
    custmap(&paths)
        .arg("scenarios")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load dataset"));
}

#[test]
fn missing_reference_is_fatal() {
    let (_dir, paths) = setup();
    fs::remove_file(&paths.reference).expect("remove reference");
    custmap(&paths)
        .arg("scenarios")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load reference data"));
}

#[test]
fn malformed_colors_fall_back_to_defaults() {
    let (_dir, paths) = setup();
    fs::write(&paths.colors, "not json at all").expect("overwrite colors");
    custmap(&paths)
        .arg("legend")
        .assert()
        .success()
        .stdout(predicate::str::contains("#e9d5ff"));
}

#[test]
fn legend_reads_theme_overrides() {
    let (_dir, paths) = setup();
    custmap(&paths)
        .arg("legend")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account"))
        .stdout(predicate::str::contains("#445566"));
}

#[test]
fn empty_dataset_warns_but_succeeds() {
    let (_dir, paths) = setup();
    fs::write(&paths.dataset, "[]").expect("overwrite dataset");
    custmap(&paths)
        .arg("scenarios")
        .assert()
        .success()
        .stdout(predicate::str::contains("no scenarios loaded"))
        .stderr(predicate::str::contains("empty"));
}
