// CLI integration tests for fieldprobe
// These tests run the compiled binary against snapshot files.

mod common;

use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;

/// Helper to run fieldprobe CLI commands
fn run_fieldprobe(args: &[&str]) -> std::process::Output {
    let binary_path = env!("CARGO_BIN_EXE_fieldprobe");
    Command::new(binary_path)
        .args(args)
        .output()
        .expect("Failed to execute fieldprobe command")
}

/// Write snapshot JSON into a temp dir and return its path.
fn write_snapshot(dir: &tempfile::TempDir, contents: &str) -> String {
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, contents).expect("Failed to write snapshot file");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_resolve_login_page() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_snapshot(&dir, common::fixtures::LOGIN_PAGE);

    let result = run_fieldprobe(&["resolve", &path]);

    assert!(result.status.success());
    let output: Value = serde_json::from_slice(&result.stdout).expect("stdout is not JSON");
    let resolutions = &output["resolutions"];
    assert_eq!(resolutions["email"]["candidate_index"], 0);
    assert_eq!(resolutions["password"]["candidate_index"], 1);
    assert_eq!(resolutions["login_button"]["candidate_index"], 2);
    assert_eq!(resolutions["newsletter"]["candidate_index"], 3);
    assert_eq!(resolutions["email"]["resolved_by"], "input_type");
}

#[test]
fn test_resolve_reads_stdin() {
    let binary_path = env!("CARGO_BIN_EXE_fieldprobe");
    let mut child = Command::new(binary_path)
        .args(["resolve", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn fieldprobe");

    child
        .stdin
        .take()
        .expect("stdin not captured")
        .write_all(common::fixtures::SIGNUP_PAGE.as_bytes())
        .expect("Failed to write snapshot to stdin");

    let result = child
        .wait_with_output()
        .expect("Failed to wait for fieldprobe");

    assert!(result.status.success());
    let output: Value = serde_json::from_slice(&result.stdout).expect("stdout is not JSON");
    assert_eq!(output["resolutions"]["first_name"]["candidate_index"], 0);
    assert_eq!(output["resolutions"]["last_name"]["candidate_index"], 1);
    assert_eq!(output["resolutions"]["email"]["candidate_index"], 2);
}

#[test]
fn test_resolve_simple_format() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_snapshot(&dir, common::fixtures::LOGIN_PAGE);

    let result = run_fieldprobe(&["resolve", &path, "--format", "simple"]);

    assert!(result.status.success());
    let output = String::from_utf8_lossy(&result.stdout);
    assert!(output.contains("email: element #0"));
    assert!(output.contains("password: element #1"));
    assert!(output.contains("input_type"));
}

#[test]
fn test_resolve_cutoff_can_empty_results() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    // Bare element array form, fuzzy-only evidence.
    let path = write_snapshot(&dir, r#"[{"placeholder": "emali"}]"#);

    let result = run_fieldprobe(&["resolve", &path, "--cutoff", "85", "--format", "simple"]);

    assert!(result.status.success());
    let output = String::from_utf8_lossy(&result.stdout);
    assert_eq!(output.trim(), "No fields resolved");
}

#[test]
fn test_resolve_pretty_output() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_snapshot(&dir, common::fixtures::LOGIN_PAGE);

    let result = run_fieldprobe(&["resolve", &path, "--pretty"]);

    assert!(result.status.success());
    let output = String::from_utf8_lossy(&result.stdout);
    assert!(output.starts_with("{\n"));
    serde_json::from_str::<Value>(&output).expect("pretty output is not JSON");
}

#[test]
fn test_match_single_element() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_snapshot(&dir, common::fixtures::LOGIN_PAGE);

    let result = run_fieldprobe(&["match", &path, "--index", "0"]);

    assert!(result.status.success());
    let matches: Value = serde_json::from_slice(&result.stdout).expect("stdout is not JSON");
    assert_eq!(matches[0]["field"], "email");
    assert!(matches[0]["score"].as_f64().expect("score is a number") > 0.5);
    assert!(!matches[0]["contributors"].as_array().expect("contributors").is_empty());
}

#[test]
fn test_fields_lists_dictionary() {
    let result = run_fieldprobe(&["fields"]);

    assert!(result.status.success());
    let rows: Value = serde_json::from_slice(&result.stdout).expect("stdout is not JSON");
    let rows = rows.as_array().expect("expected an array");
    assert_eq!(rows.len(), 80);
    assert!(rows.iter().any(|row| row["field"] == "email"));
    assert!(rows.iter().any(|row| row["field"] == "login_button"));
}

#[test]
fn test_fields_filter_and_synonyms() {
    let result = run_fieldprobe(&["fields", "--filter", "email", "--synonyms"]);

    assert!(result.status.success());
    let rows: Value = serde_json::from_slice(&result.stdout).expect("stdout is not JSON");
    let rows = rows.as_array().expect("expected an array");
    assert!(rows.iter().any(|row| row["field"] == "email"));
    assert!(rows.iter().any(|row| row["field"] == "email_optin"));
    assert!(rows.iter().all(|row| {
        row["field"]
            .as_str()
            .expect("field is a string")
            .contains("email")
    }));

    let email = rows
        .iter()
        .find(|row| row["field"] == "email")
        .expect("email row present");
    let synonyms = email["synonyms"].as_array().expect("synonyms is an array");
    assert!(synonyms.iter().any(|s| s.as_str() == Some("email address")));
}

#[test]
fn test_region_classification() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_snapshot(&dir, common::fixtures::LOGIN_PAGE);

    let result = run_fieldprobe(&["region", &path]);

    assert!(result.status.success());
    let rows: Value = serde_json::from_slice(&result.stdout).expect("stdout is not JSON");
    let rows = rows.as_array().expect("expected an array");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["region"], "text");
    assert_eq!(rows[3]["region"], "footer");
    assert_eq!(rows[3]["index"], 3);
}

#[test]
fn test_error_missing_snapshot_file() {
    let result = run_fieldprobe(&["resolve", "/nonexistent/snapshot.json"]);

    assert_eq!(result.status.code(), Some(1));
    let output: Value = serde_json::from_slice(&result.stdout).expect("stdout is not JSON");
    assert_eq!(output["error"], true);
    assert_eq!(output["exit_code"], 1);
}

#[test]
fn test_error_invalid_snapshot() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_snapshot(&dir, "not json");

    let result = run_fieldprobe(&["resolve", &path]);

    assert_eq!(result.status.code(), Some(3));
    let output: Value = serde_json::from_slice(&result.stdout).expect("stdout is not JSON");
    assert_eq!(output["error"], true);
    let message = output["message"].as_str().expect("message is a string");
    assert!(message.starts_with("Invalid snapshot:"));
}

#[test]
fn test_error_element_index_out_of_range() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_snapshot(&dir, common::fixtures::LOGIN_PAGE);

    let result = run_fieldprobe(&["match", &path, "--index", "99"]);

    assert_eq!(result.status.code(), Some(4));
    let output: Value = serde_json::from_slice(&result.stdout).expect("stdout is not JSON");
    assert_eq!(output["error"], true);
    assert_eq!(output["exit_code"], 4);
    let message = output["message"].as_str().expect("message is a string");
    assert!(message.contains("99"));
}
