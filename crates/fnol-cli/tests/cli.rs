//! End-to-end tests for the `fnol` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use tempfile::TempDir;

const FAST_TRACK_NOTICE: &str = "\
Policy Number: AB123456
Policyholder Name: Arjun Mehta
Effective Dates: 01/01/2024 to 31/12/2024
Incident Date: 05/05/2024
Incident Time: 11:15
Incident Location: Andheri East, Mumbai
Description: Side mirror broken in parking lot
Claimant: Arjun Mehta
Contact: arjun.mehta@example.com, +91 9123456789
Asset Type: Car
Asset ID: MH02XY9999
Estimated Damage: 10,000
Claim Type: Collision
Photos and police report attached.
";

fn fnol() -> Command {
    let mut cmd = Command::cargo_bin("fnol").unwrap();
    // Keep the user's config file out of the tests
    cmd.env("XDG_CONFIG_HOME", "/nonexistent-fnol-config");
    cmd.env("HOME", "/nonexistent-fnol-home");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn json_output(path: &Path) -> serde_json::Value {
    let output = fnol().arg(path).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_no_arguments_fails() {
    fnol()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_file_fails() {
    fnol()
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_text_file_fast_track() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "claim.txt", FAST_TRACK_NOTICE);

    let json = json_output(&path);

    assert_eq!(json["recommendedRoute"], "Fast-track");
    assert_eq!(json["missingFields"], serde_json::json!([]));
    assert_eq!(
        json["reasoning"],
        "Estimated damage 10000.0 < 25000 → Fast-track"
    );
    assert_eq!(json["extractedFields"]["claimType"], "collision");
    assert_eq!(
        json["extractedFields"]["attachments"],
        serde_json::json!(["photos", "report"])
    );
}

#[test]
fn test_output_is_indented_json() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "claim.txt", FAST_TRACK_NOTICE);

    fnol()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "{\n  \"extractedFields\": {\n    \"policyNumber\": \"AB123456\"",
        ));
}

#[test]
fn test_unreadable_pdf_is_manual_review() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "scan.pdf", "this is not a pdf");

    let json = json_output(&path);

    assert_eq!(json["recommendedRoute"], "Manual review");
    assert_eq!(json["missingFields"].as_array().unwrap().len(), 13);
    assert_eq!(json["extractedFields"]["description"], "");
}

#[test]
fn test_process_subcommand_text_format() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "claim.txt", FAST_TRACK_NOTICE);

    fnol()
        .args(["process", "--format", "text"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Route: Fast-track\n"))
        .stdout(predicate::str::contains("Missing fields: none"));
}

#[test]
fn test_explain_reports_rule() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "claim.txt", FAST_TRACK_NOTICE);

    fnol()
        .args(["process", "--explain"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("FastTrack"));
}

#[test]
fn test_config_threshold_changes_route() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "claim.txt", FAST_TRACK_NOTICE);
    let config = write(
        &dir,
        "config.json",
        r#"{"triage": {"fast_track_threshold": 5000}}"#,
    );

    let output = fnol()
        .arg("--config")
        .arg(&config)
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["recommendedRoute"], "Manual review");
    assert_eq!(json["reasoning"], "Default: needs review");
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "claim.txt", FAST_TRACK_NOTICE);
    let config = write(
        &dir,
        "config.json",
        r#"{"triage": {"fast_track_threshold": -1}}"#,
    );

    fnol()
        .arg("--config")
        .arg(&config)
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("fast_track_threshold"));
}

#[test]
fn test_batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    write(&dir, "one.txt", FAST_TRACK_NOTICE);
    write(
        &dir,
        "two.txt",
        &FAST_TRACK_NOTICE.replace("Estimated Damage: 10,000", "Estimated Damage: 90,000"),
    );
    write(&dir, "notes.md", "ignored");
    let out_dir = dir.path().join("out");

    fnol()
        .arg("batch")
        .arg(format!("{}/*", dir.path().display()))
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"));

    assert!(out_dir.join("one.json").exists());
    assert!(out_dir.join("two.json").exists());

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("one.txt,success,Fast-track,0,"));
    assert!(lines[2].starts_with("two.txt,success,Manual review,0,"));
}

#[test]
fn test_batch_without_matches_fails() {
    let dir = TempDir::new().unwrap();

    fnol()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn test_config_get_default_threshold() {
    fnol()
        .args(["config", "get", "triage.fast_track_threshold"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25000.0"));
}

#[test]
fn test_global_flags_before_subcommand() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "claim.txt", FAST_TRACK_NOTICE);

    fnol()
        .args(["-v", "process"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"recommendedRoute\": \"Fast-track\""))
        .stderr(predicate::str::contains("Processing file"));
}

#[test]
fn test_config_before_process_subcommand() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "claim.txt", FAST_TRACK_NOTICE);
    let config = write(
        &dir,
        "config.json",
        r#"{"triage": {"fast_track_threshold": 5000}}"#,
    );

    let output = fnol()
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["recommendedRoute"], "Manual review");
    assert_eq!(json["reasoning"], "Default: needs review");
}

#[test]
fn test_verbose_before_batch_subcommand() {
    let dir = TempDir::new().unwrap();
    write(&dir, "one.txt", FAST_TRACK_NOTICE);

    fnol()
        .arg("-v")
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 files"));
}

#[test]
fn test_missing_pdf_is_manual_review() {
    let dir = TempDir::new().unwrap();

    let json = json_output(&dir.path().join("absent.pdf"));

    assert_eq!(json["recommendedRoute"], "Manual review");
    assert_eq!(json["missingFields"].as_array().unwrap().len(), 13);
}

#[test]
fn test_config_get_reads_global_config() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "config.json",
        r#"{"triage": {"fast_track_threshold": 5000}}"#,
    );

    fnol()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "triage.fast_track_threshold"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5000.0"));
}

#[test]
fn test_config_init_writes_to_global_config_path() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("fnol.json");

    fnol()
        .arg("--config")
        .arg(&target)
        .args(["config", "init"])
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(written["triage"]["fraud_keyword"], "fraud");
}
