//! CLI integration tests
//!
//! These tests run the `schevo` binary end to end against input documents
//! written to a temporary directory.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const RENAME_DOCUMENT: &str = r#"{
  "oldSchemas": {
    "UserSchema": {"type": "object", "properties": {"email": {"type": "string"}}, "required": ["email"]}
  },
  "newSchemas": {
    "UserSchema": {"type": "object", "properties": {"emailAddress": {"type": "string"}}, "required": ["emailAddress"]}
  },
  "services": [
    {"name": "user-service", "importance": "HIGH", "callsPerDay": 25000, "dependencies": ["UserSchema.email"]},
    {"name": "search-service", "importance": "MEDIUM", "callsPerDay": 12000, "dependencies": ["UserSchema.id"]}
  ]
}"#;

fn write_input(temp_dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_schevo"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_cli_analyze_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "input.json", RENAME_DOCUMENT);

    let value = stdout_json(&run(&["analyze", input.to_str().unwrap()]));

    assert_eq!(value["summary"]["total"], 2);
    assert_eq!(value["summary"]["breaking"], 2);
    assert_eq!(value["affectedServices"].as_array().unwrap().len(), 1);
    assert_eq!(value["affectedServices"][0]["name"], "user-service");
    assert_eq!(value["deploymentPlan"]["totalSteps"], 1);
    assert_eq!(value["deploymentPlan"]["order"], "optimized");
}

#[test]
fn test_cli_analyze_sample_markdown() {
    let output = run(&["analyze", "--sample", "--format", "markdown"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# Schema Evolution Analysis"));
    assert!(stdout.contains("### Step 5: order-service"));
}

#[test]
fn test_cli_analyze_declared_topology() {
    let value = stdout_json(&run(&["analyze", "--sample", "--declared-topology"]));

    let last = &value["deploymentPlan"]["steps"][4];
    assert_eq!(last["service"], "order-service");
    assert_eq!(
        last["prerequisites"],
        serde_json::json!(["user-service deployed successfully"])
    );
}

#[test]
fn test_cli_analyze_topology_file() {
    let temp_dir = TempDir::new().unwrap();
    let topology = write_input(
        &temp_dir,
        "topology.yaml",
        "order-service:\n  - notification-service\n",
    );

    let value = stdout_json(&run(&[
        "analyze",
        "--sample",
        "--topology",
        topology.to_str().unwrap(),
    ]));

    assert_eq!(
        value["deploymentPlan"]["steps"][4]["prerequisites"],
        serde_json::json!(["notification-service deployed successfully"])
    );
}

#[test]
fn test_cli_analyze_export() {
    let temp_dir = TempDir::new().unwrap();
    let export_path = temp_dir.path().join("plan.json");

    let output = run(&["analyze", "--sample", "--export", export_path.to_str().unwrap()]);
    stdout_json(&output);

    let export: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&export_path).unwrap()).unwrap();
    assert_eq!(export["summary"], "5 services");
    assert_eq!(export["plan"]["totalSteps"], 5);
    assert!(!export["analysisId"].as_str().unwrap().is_empty());
    assert!(export["generatedAt"].is_string());
    assert_eq!(
        export["identity"]["servicesDigest"].as_str().unwrap().len(),
        64
    );
}

#[test]
fn test_cli_diff_outputs_changes_and_summary_only() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "input.json", RENAME_DOCUMENT);

    let value = stdout_json(&run(&["diff", input.to_str().unwrap()]));

    assert_eq!(value["changes"][0]["type"], "FIELD_REMOVED");
    assert_eq!(value["changes"][1]["type"], "FIELD_ADDED");
    assert_eq!(value["summary"]["hasBreakingChanges"], true);
    assert!(value.get("deploymentPlan").is_none());
}

#[test]
fn test_cli_example_round_trips_through_analyze() {
    let output = run(&["example"]);
    let example = stdout_json(&output);
    assert_eq!(example["services"][0]["name"], "user-service");

    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        "example.json",
        &String::from_utf8_lossy(&output.stdout),
    );
    let value = stdout_json(&run(&["analyze", input.to_str().unwrap()]));
    assert_eq!(value["summary"]["breaking"], 5);
}

#[test]
fn test_cli_missing_key_fails_with_code() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "bad.json", r#"{"oldSchemas": {}}"#);

    let output = run(&["analyze", input.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: [ERR_MISSING_FIELD]"), "stderr: {}", stderr);
    assert!(stderr.contains("newSchemas"));
}

#[test]
fn test_cli_unreadable_input_fails_with_io() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");

    let output = run(&["diff", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[ERR_IO]"));
}

#[test]
fn test_cli_malformed_topology_fails() {
    let temp_dir = TempDir::new().unwrap();
    let topology = write_input(&temp_dir, "topology.yaml", "- not\n- a mapping\n");

    let output = run(&["analyze", "--sample", "--topology", topology.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[ERR_INVALID_TOPOLOGY]"));
}
