//! CLI command contract tests
//!
//! Drives the `tint` binary against a temp data directory. Contract
//! guarantees tested:
//! - Deterministic exit codes
//! - Stable JSON in `--format json` mode
//! - No ANSI escapes in plain output
//! - Palette-level outcomes (duplicate, empty clear) warn instead of failing

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Test fixture helpers
// =============================================================================

/// Build a tint command pointed at a temp data directory.
fn tint_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tint").expect("tint binary should be built");
    cmd.env("TINT_DATA_DIR", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Assert that output contains no ANSI escape sequences.
fn assert_no_ansi(output: &str, context: &str) {
    assert!(
        !output.contains("\x1b["),
        "{context}: output should not contain ANSI escapes, got:\n{output}"
    );
}

// =============================================================================
// show / set / pick
// =============================================================================

#[test]
fn show_defaults_to_pure_red() {
    let dir = TempDir::new().unwrap();
    let output = tint_cmd(&dir).arg("show").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("#FF0000"));
    assert!(stdout.contains("rgb(255, 0, 0)"));
    assert!(stdout.contains("hsl(0, 100%, 50%)"));
    assert_no_ansi(&stdout, "show plain");
}

#[test]
fn show_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    let output = tint_cmd(&dir)
        .args(["show", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let snap: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(snap["r"], 255);
    assert_eq!(snap["hex"], "#FF0000");
}

#[test]
fn show_accepts_hex_and_preset_names() {
    let dir = TempDir::new().unwrap();
    tint_cmd(&dir)
        .args(["show", "#112233"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#112233"));

    tint_cmd(&dir)
        .args(["show", "lime"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#00FF00"));
}

#[test]
fn show_unknown_color_fails() {
    let dir = TempDir::new().unwrap();
    tint_cmd(&dir)
        .args(["show", "not-a-color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-a-color"));
}

#[test]
fn set_hue_120_turns_red_into_green() {
    let dir = TempDir::new().unwrap();
    tint_cmd(&dir)
        .args(["set", "h=120"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#00FF00"));

    // The edit persists across invocations.
    tint_cmd(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("rgb(0, 255, 0)"));
}

#[test]
fn set_applies_edits_in_order() {
    let dir = TempDir::new().unwrap();
    let output = tint_cmd(&dir)
        .args(["set", "r=0", "g=0", "b=255", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let snap: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snap["hex"], "#0000FF");
    assert_eq!(snap["h"], 240);
}

#[test]
fn set_rejects_malformed_edit() {
    let dir = TempDir::new().unwrap();
    tint_cmd(&dir)
        .args(["set", "q=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown channel"));
}

#[test]
fn pick_preset_updates_current_color() {
    let dir = TempDir::new().unwrap();
    tint_cmd(&dir).args(["pick", "navy"]).assert().success();
    tint_cmd(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("#000080"));
}

// =============================================================================
// palette: save / list / remove / clear
// =============================================================================

#[test]
fn save_then_list_round_trips_through_store() {
    let dir = TempDir::new().unwrap();
    tint_cmd(&dir).args(["save", "#112233"]).assert().success();

    // A fresh invocation reloads the palette from its serialized form.
    let output = tint_cmd(&dir)
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    let palette: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(palette, vec!["#112233".to_string()]);
}

#[test]
fn duplicate_save_warns_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    tint_cmd(&dir).args(["save", "#FF0000"]).assert().success();
    tint_cmd(&dir)
        .args(["save", "#ff0000"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already in palette"));

    let output = tint_cmd(&dir)
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    let palette: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(palette.len(), 1);
}

#[test]
fn save_defaults_to_current_color() {
    let dir = TempDir::new().unwrap();
    tint_cmd(&dir).args(["set", "h=120"]).assert().success();
    tint_cmd(&dir).arg("save").assert().success();

    tint_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("#00FF00"));
}

#[test]
fn remove_out_of_range_is_silent_noop() {
    let dir = TempDir::new().unwrap();
    tint_cmd(&dir).args(["save", "#112233"]).assert().success();
    tint_cmd(&dir).args(["remove", "7"]).assert().success();

    tint_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("#112233"));
}

#[test]
fn clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    tint_cmd(&dir).args(["save", "#112233"]).assert().success();

    tint_cmd(&dir)
        .arg("clear")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    tint_cmd(&dir).args(["clear", "--yes"]).assert().success();
    tint_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("empty"));
}

#[test]
fn clear_empty_palette_warns_not_fails() {
    let dir = TempDir::new().unwrap();
    tint_cmd(&dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already empty"));
}

// =============================================================================
// export / copy / presets
// =============================================================================

#[test]
fn export_writes_named_document() {
    let dir = TempDir::new().unwrap();
    tint_cmd(&dir).args(["save", "#112233"]).assert().success();

    let path = dir.path().join("out.json");
    tint_cmd(&dir)
        .args(["export"])
        .arg(&path)
        .args(["--name", "Blues"])
        .assert()
        .success();

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["name"], "Blues");
    assert_eq!(doc["colors"][0], "#112233");
    assert!(doc["exported"].as_str().unwrap().contains('T')); // ISO-8601
}

#[test]
fn copy_emits_osc52_sequence() {
    let dir = TempDir::new().unwrap();
    let output = tint_cmd(&dir)
        .args(["copy", "#112233"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\x1b]52;c;"), "expected OSC 52 prefix");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Copied"));
}

#[test]
fn presets_lists_builtins() {
    let dir = TempDir::new().unwrap();
    tint_cmd(&dir)
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("red").and(predicate::str::contains("#FF0000")));
}

#[test]
fn added_preset_is_pickable() {
    let dir = TempDir::new().unwrap();
    tint_cmd(&dir)
        .args(["presets", "--add", "brand=#AA00FF"])
        .assert()
        .success();

    tint_cmd(&dir)
        .args(["pick", "brand"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#AA00FF"));
}

#[test]
fn duplicate_preset_name_warns() {
    let dir = TempDir::new().unwrap();
    tint_cmd(&dir)
        .args(["presets", "--add", "red=#AA0000"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
}
