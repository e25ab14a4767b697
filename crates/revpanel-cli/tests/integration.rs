//! Integration tests for revpanel-cli.
//!
//! Tests invoke the `revpanel` binary against catalogs written to temporary
//! directories, so they never depend on an installed catalog.

use std::path::Path;
use std::process::{Command, Output};

/// Helper to get the path to the `revpanel` binary built by cargo.
fn revpanel_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_revpanel"))
}

fn run(args: &[&str]) -> Output {
    revpanel_bin()
        .args(args)
        .output()
        .expect("failed to run revpanel")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn export_factory(dir: &Path) -> String {
    let path = dir.join("catalog.toml");
    let path_str = path.to_str().expect("utf-8 temp path").to_string();
    let output = run(&["catalog", "export", &path_str]);
    assert!(output.status.success(), "export failed: {output:?}");
    path_str
}

// ---------------------------------------------------------------------------
// revpanel format
// ---------------------------------------------------------------------------

#[test]
fn format_single_param() {
    let output = run(&["format", "delay", "0"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "125ms");
}

#[test]
fn format_negative_angle() {
    let output = run(&["format", "signal", "-135"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "0%");
}

#[test]
fn format_clamps_out_of_range() {
    let output = run(&["format", "shimmer", "400"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "1.000");
}

#[test]
fn format_all_lists_every_param() {
    let output = run(&["format", "--all", "0"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for id in ["signal", "delay", "decay", "spread", "shimmer"] {
        assert!(text.contains(id), "missing '{id}' in:\n{text}");
    }
    assert!(text.contains("∅"), "spread at center should be the empty-set glyph");
}

#[test]
fn format_plain_value_and_range() {
    let output = run(&["format", "delay", "0", "--plain"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "125ms 125.000ms [0ms..250ms]");

    let output = run(&["format", "decay", "-135", "--plain"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "0.1s 0.100s [0.1s..20s]");
}

#[test]
fn format_all_plain_lists_ranges() {
    let output = run(&["format", "--all", "135", "--plain"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let spread = text
        .lines()
        .find(|line| line.starts_with("spread"))
        .expect("spread row");
    assert!(spread.ends_with("200.000% [0%..200%]"), "row was: {spread}");
}

#[test]
fn format_unknown_param_fails() {
    let output = run(&["format", "wetness", "10"]);
    assert!(!output.status.success());
}

// ---------------------------------------------------------------------------
// revpanel catalog
// ---------------------------------------------------------------------------

#[test]
fn export_then_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = export_factory(dir.path());

    let output = run(&["catalog", "list", "--file", &path]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Halls:"));
    assert!(text.contains("cathedral"));
    assert!(text.contains("5 categories, 14 presets"));
}

#[test]
fn list_json_is_parseable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = export_factory(dir.path());

    let output = run(&["catalog", "list", "--file", &path, "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("valid json");
    assert_eq!(value["presets"].as_array().map(Vec::len), Some(14));
    assert_eq!(value["categories"][0]["id"], "halls");
}

#[test]
fn export_refuses_to_overwrite() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = export_factory(dir.path());

    let output = run(&["catalog", "export", &path]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));

    let output = run(&["catalog", "export", &path, "--force"]);
    assert!(output.status.success());
}

#[test]
fn show_and_search() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = export_factory(dir.path());

    let output = run(&["catalog", "show", "gold-plate", "--file", &path]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Preset: Gold Plate"));
    assert!(text.contains("Category: Plates"));

    let output = run(&["catalog", "show", "no-such-preset", "--file", &path]);
    assert!(!output.status.success());

    let output = run(&["catalog", "search", "PLATE", "--file", &path]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("gold-plate"));
    assert!(text.contains("dark-plate"));
    assert!(!text.contains("cathedral"));
}

#[test]
fn validate_reports_problems() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = export_factory(dir.path());

    let output = run(&["catalog", "validate", &good]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("OK"));

    let bad = dir.path().join("bad.toml");
    std::fs::write(
        &bad,
        r#"
[[categories]]
id = "favorites"
name = "Mine"

[[presets]]
id = "x"
name = "X"
category = "nowhere"
"#,
    )
    .expect("write bad catalog");

    let output = run(&["catalog", "validate", bad.to_str().expect("utf-8 temp path")]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2 problem(s)"), "stderr was:\n{stderr}");
}

#[test]
fn paths_prints_locations() {
    let output = run(&["catalog", "paths"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("User catalog:"));
    assert!(text.contains("catalog.toml"));
}
