//! Integration tests for CLI JSON output behavior
//!
//! These tests verify that --json flags produce valid, parseable JSON output
//! for automation and scripting workflows.

use std::process::{Command, Output};

use tempfile::TempDir;

fn run_folio(home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .current_dir(home.path())
        .env("HOME", home.path())
        .env("FOLIO_PROJECTS_FILE", home.path().join("projects.json"))
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute 'folio {}': {}", args.join(" "), e))
}

fn run_json(home: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = run_folio(home, args);
    assert!(
        output.status.success(),
        "folio {} failed with exit code {:?}. stderr: {}",
        args.join(" "),
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be valid JSON")
}

#[test]
fn test_list_json_outputs_valid_json_array() {
    let home = TempDir::new().unwrap();
    let projects = run_json(&home, &["list", "--json"]);

    let arr = projects.as_array().expect("JSON output should be an array");
    assert_eq!(arr.len(), 3);
    for project in arr {
        assert!(project["id"].is_string());
        assert!(project["createdAt"].is_string());
        assert!(project["tags"].is_array());
    }
}

#[test]
fn test_list_json_respects_category() {
    let home = TempDir::new().unwrap();
    let projects = run_json(&home, &["list", "--category", "app", "--json"]);

    let arr = projects.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["category"], "app");
}

#[test]
fn test_list_json_unknown_category_is_empty_array() {
    let home = TempDir::new().unwrap();
    let output = run_folio(&home, &["list", "--category", "desktop", "--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "[]");
}

#[test]
fn test_search_json_blank_query_lists_everything() {
    let home = TempDir::new().unwrap();
    let projects = run_json(&home, &["search", "   ", "--json"]);
    assert_eq!(projects.as_array().unwrap().len(), 3);
}

#[test]
fn test_show_json_returns_single_object() {
    let home = TempDir::new().unwrap();
    let projects = run_json(&home, &["list", "--json"]);
    let id = projects[0]["id"].as_str().unwrap().to_string();

    let project = run_json(&home, &["show", &id, "--json"]);
    assert!(project.is_object());
    assert_eq!(project["id"], id.as_str());
}

#[test]
fn test_stats_json_after_edit() {
    let home = TempDir::new().unwrap();
    let projects = run_json(&home, &["list", "--json"]);
    let id = projects[1]["id"].as_str().unwrap().to_string();
    assert_eq!(id, "sample-mobile-app");

    let output = run_folio(&home, &["edit", &id, "--title", "Renamed Sample"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stats = run_json(&home, &["stats", "--json"]);
    assert_eq!(stats["total"], 3);
    assert!(stats["lastUpdated"].is_string());
    assert_eq!(stats["lastUpdatedLabel"], "today");

    let project = run_json(&home, &["show", &id, "--json"]);
    assert_eq!(project["title"], "Renamed Sample");
    assert!(project["updatedAt"].is_string());
}

#[test]
fn test_stats_json_empty_catalog() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("projects.json"), "[]").unwrap();

    let stats = run_json(&home, &["stats", "--json"]);
    assert_eq!(stats["total"], 0);
    assert!(stats["lastUpdated"].is_null());
    assert_eq!(stats["lastUpdatedLabel"], "none");
}
