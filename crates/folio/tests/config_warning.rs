//! Integration tests for configuration loading from the CLI

use std::process::Command;

use tempfile::TempDir;

#[test]
fn test_invalid_config_warns_and_uses_defaults() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".folio");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[storage\nfile = ").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(["list", "--json"])
        .current_dir(home.path())
        .env("HOME", home.path())
        .env("FOLIO_PROJECTS_FILE", home.path().join("projects.json"))
        .output()
        .expect("Failed to execute 'folio list'");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Could not load config"),
        "expected a config warning, got: {}",
        stderr
    );
}

#[test]
fn test_config_disables_samples_and_sets_default_category() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".folio");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[storage]\nseed_samples = false\n\n[display]\ndefault_category = \"game\"\n",
    )
    .unwrap();

    let run = |args: &[&str]| {
        Command::new(env!("CARGO_BIN_EXE_folio"))
            .args(args)
            .current_dir(home.path())
            .env("HOME", home.path())
            .env("FOLIO_PROJECTS_FILE", home.path().join("projects.json"))
            .output()
            .expect("Failed to execute folio")
    };

    let output = run(&["list", "--json"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");

    let output = run(&[
        "add", "-t", "Puzzle", "-d", "Tiles", "-c", "game", "--tags", "Bevy",
    ]);
    assert!(output.status.success());
    let output = run(&[
        "add", "-t", "Notes", "-d", "Markdown", "-c", "app", "--tags", "Tauri",
    ]);
    assert!(output.status.success());

    let output = run(&["list", "--json"]);
    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["title"], "Puzzle");
}
