use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

const SAMPLE_REPORTS: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

const SAMPLE_PAIRS: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3
";

/// A command rooted in `dir`, isolated from any global config file.
fn lg(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lg").unwrap();
    cmd.current_dir(dir)
        .env("LG_CONFIG", dir.join("lg-test-config.toml"))
        .env_remove("LG_INPUT")
        .env_remove("LG_DETAIL");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("lg").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("lg").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_safety_human_output() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("reports.txt"), SAMPLE_REPORTS).unwrap();

    lg(dir.path())
        .args(["safety", "reports.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SAFE"))
        .stdout(predicate::str::contains("UNSAFE"))
        .stdout(predicate::str::contains("DAMPENED"))
        .stdout(predicate::str::contains("(removed 3 at position 2: 1 2 4 5)"))
        .stdout(predicate::str::contains("Safety Analysis"))
        .stdout(predicate::str::contains("66.7%"));
}

#[test]
fn test_safety_robot_envelope() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("reports.txt"), SAMPLE_REPORTS).unwrap();

    let output = lg(dir.path())
        .args(["--robot", "safety", "reports.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], Value::String("ok".to_string()));
    assert_eq!(json["data"]["summary"]["analyzed"], 6);
    assert_eq!(json["data"]["summary"]["safe"], 2);
    assert_eq!(json["data"]["summary"]["dampened"], 2);
    assert_eq!(json["data"]["summary"]["unsafe"], 2);
    assert_eq!(json["data"]["dampener"], Value::Bool(true));

    let dampened = &json["data"]["reports"][3];
    assert_eq!(dampened["status"], "safe_with_removal");
    assert_eq!(dampened["index"], 1);
    assert_eq!(dampened["removed_level"], 3);
    assert_eq!(dampened["dampened_levels"], serde_json::json!([1, 2, 4, 5]));
}

#[test]
fn test_safety_no_dampener() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("reports.txt"), "1 3 2 4 5\n").unwrap();

    let output = lg(dir.path())
        .args(["--robot", "safety", "reports.txt", "--no-dampener"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["dampener"], Value::Bool(false));
    assert_eq!(json["data"]["summary"]["unsafe"], 1);
    assert_eq!(json["data"]["summary"]["dampened"], 0);
}

#[test]
fn test_safety_parse_errors_do_not_abort() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("reports.txt"), "1 2 3\n4 x 6\n7 6 4 2 1\n").unwrap();

    lg(dir.path())
        .args(["safety", "reports.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line 2"))
        .stdout(predicate::str::contains("skipped"))
        .stdout(predicate::str::contains("Safety Analysis"));

    let output = lg(dir.path())
        .args(["--robot", "safety", "reports.txt"])
        .output()
        .unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["summary"]["analyzed"], 2);
    assert_eq!(json["data"]["summary"]["parse_errors"], 1);
    assert_eq!(json["data"]["issues"][0]["line"], 2);
    assert_eq!(json["data"]["issues"][0]["token"], "x");
}

#[test]
fn test_safety_missing_file_fails_cleanly() {
    let dir = tempdir().unwrap();

    lg(dir.path())
        .args(["safety", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: cannot read missing.txt"));
}

#[test]
fn test_safety_missing_file_robot_error_json() {
    let dir = tempdir().unwrap();

    let output = lg(dir.path())
        .args(["--robot", "safety", "missing.txt"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["error"], Value::Bool(true));
    assert_eq!(json["code"], "input_unreadable");
}

#[test]
fn test_safety_summary_only() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("reports.txt"), SAMPLE_REPORTS).unwrap();

    lg(dir.path())
        .args(["safety", "reports.txt", "--summary-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line 1").not())
        .stdout(predicate::str::contains("Safety Analysis"));
}

#[test]
fn test_safety_default_input_path() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("input.txt"), SAMPLE_REPORTS).unwrap();

    lg(dir.path())
        .arg("safety")
        .assert()
        .success()
        .stdout(predicate::str::contains("Safety Analysis"));
}

#[test]
fn test_lg_input_env_override() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("custom.txt"), SAMPLE_REPORTS).unwrap();

    lg(dir.path())
        .env("LG_INPUT", "custom.txt")
        .arg("safety")
        .assert()
        .success()
        .stdout(predicate::str::contains("reports analyzed"));
}

#[test]
fn test_config_file_sets_input_and_detail() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("alt.txt"), SAMPLE_REPORTS).unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[input]\npath = \"alt.txt\"\n\n[output]\ndetail = false\n",
    )
    .unwrap();

    lg(dir.path())
        .args(["--config", config_path.to_str().unwrap(), "safety"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line 1").not())
        .stdout(predicate::str::contains("Safety Analysis"));
}

#[test]
fn test_safety_jsonl_stream() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("reports.txt"), SAMPLE_REPORTS).unwrap();

    let output = lg(dir.path())
        .args(["--format", "jsonl", "safety", "reports.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines: Vec<Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    // One object per report, then the summary.
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0]["status"], "safe");
    assert_eq!(lines[0]["levels"], serde_json::json!([7, 6, 4, 2, 1]));
    assert_eq!(lines[6]["summary"]["analyzed"], 6);
}

#[test]
fn test_distance_human_output() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("pairs.txt"), SAMPLE_PAIRS).unwrap();

    lg(dir.path())
        .args(["distance", "pairs.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total distance"))
        .stdout(predicate::str::contains("11"));
}

#[test]
fn test_similarity_human_output() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("pairs.txt"), SAMPLE_PAIRS).unwrap();

    lg(dir.path())
        .args(["similarity", "pairs.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("similarity score"))
        .stdout(predicate::str::contains("31"));
}

#[test]
fn test_locations_robot_scores() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("pairs.txt"), SAMPLE_PAIRS).unwrap();

    let output = lg(dir.path())
        .args(["--robot", "locations", "pairs.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["pairs"], 6);
    assert_eq!(json["data"]["total_distance"], 11);
    assert_eq!(json["data"]["similarity_score"], 31);
}

#[test]
fn test_locations_skips_malformed_pair_lines() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("pairs.txt"), "3 4\n1 2 3\n4 3\n").unwrap();

    let output = lg(dir.path())
        .args(["--robot", "locations", "pairs.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["pairs"], 2);
    assert_eq!(json["data"]["issues"][0]["line"], 2);
}
