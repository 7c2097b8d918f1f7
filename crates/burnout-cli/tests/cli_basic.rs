//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config directory.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_burnout-cli"))
        .args(args)
        .env("BURNOUT_HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed: {:?}\nstderr: {}", args, stderr);
    stdout
}

fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

#[test]
fn test_assess_json_high_risk() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &[
            "assess",
            "--hours-worked",
            "60",
            "--sleep",
            "5",
            "--self-care",
            "2",
            "--json",
        ],
    );
    let json = parse_json(&out);
    let score = json["score"].as_f64().unwrap();
    assert!((score - 9.525).abs() < 1e-9);
    assert_eq!(json["classification"]["tier"], "High");
    assert_eq!(
        json["classification"]["window"],
        "2-4 weeks if patterns continue"
    );

    let kinds: Vec<&str> = json["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "urgent_workload",
            "document_impact",
            "reduce_work_hours",
            "improve_sleep",
            "increase_self_care"
        ]
    );
}

#[test]
fn test_assess_text_uses_config_defaults() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["assess"]);
    // 40h / 7h / 5h scores 5.9
    assert!(out.contains("5.9  Moderate Risk"), "unexpected output: {out}");
    assert!(out.contains("4-8 weeks if patterns continue"));
    assert!(out.contains("Personalized Recommendations"));
    assert!(out.contains("Key Metrics:"));
}

#[test]
fn test_assess_no_chart() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["assess", "--no-chart"]);
    assert!(!out.contains("Key Metrics:"));
}

#[test]
fn test_score_prints_one_decimal() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &["score", "--hours-worked", "40", "--sleep", "8", "--self-care", "10"],
    );
    assert_eq!(out.trim(), "4.0");
}

#[test]
fn test_score_accepts_negative_hours() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &["score", "--hours-worked", "-40", "--sleep", "8", "--self-care", "10"],
    );
    assert_eq!(out.trim(), "0.0");
}

#[test]
fn test_score_clamp_flag() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &[
            "score",
            "--hours-worked",
            "-40",
            "--sleep",
            "8",
            "--self-care",
            "10",
            "--clamp",
            "--json",
        ],
    );
    let json = parse_json(&out);
    assert_eq!(json["terms"][0]["factor"].as_f64(), Some(0.0));
}

#[test]
fn test_classify_boundaries() {
    let home = tempfile::tempdir().unwrap();
    assert!(run_cli_success(home.path(), &["classify", "3"]).starts_with("Low"));
    assert!(run_cli_success(home.path(), &["classify", "6"]).starts_with("Moderate"));
    assert!(run_cli_success(home.path(), &["classify", "6.01"]).starts_with("High"));
}

#[test]
fn test_recommend_balanced_fallback() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &[
            "recommend",
            "--hours-worked",
            "40",
            "--sleep",
            "8",
            "--self-care",
            "10",
            "--json",
        ],
    );
    let json = parse_json(&out);
    let recs = json.as_array().unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0]["title"], "Maintain Current Balance");
}

#[test]
fn test_nan_input_rejected() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["assess", "--sleep", "NaN"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_export_json_file() {
    let home = tempfile::tempdir().unwrap();
    let out_path = home.path().join("result.json");
    let out = run_cli_success(
        home.path(),
        &[
            "export",
            "--format",
            "json",
            "--out",
            out_path.to_str().unwrap(),
            "--json",
        ],
    );
    let notification = parse_json(&out);
    assert_eq!(notification["kind"], "success");

    let exported = parse_json(&std::fs::read_to_string(&out_path).unwrap());
    assert_eq!(exported["classification"]["tier"], "Moderate");
}

#[test]
fn test_export_failure_exits_nonzero() {
    let home = tempfile::tempdir().unwrap();
    let out_path = home.path().join("missing").join("result.svg");
    let (_, stderr, code) = run_cli(
        home.path(),
        &["export", "--format", "svg", "--out", out_path.to_str().unwrap()],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("File export failed"));
}

#[test]
fn test_share_copy_falls_back_to_terminal() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["share", "copy", "--sleep", "5"]);
    assert!(
        out.contains("Copied to clipboard") || out.contains("My risk level is"),
        "unexpected output: {out}"
    );
}

#[test]
fn test_config_set_changes_defaults() {
    let home = tempfile::tempdir().unwrap();
    assert_eq!(
        run_cli_success(home.path(), &["config", "get", "defaults.sleep_hours"]).trim(),
        "7.0"
    );
    run_cli_success(home.path(), &["config", "set", "defaults.hours_worked", "0"]);
    run_cli_success(home.path(), &["config", "set", "defaults.sleep_hours", "8"]);
    run_cli_success(home.path(), &["config", "set", "defaults.self_care_hours", "10"]);

    let out = run_cli_success(home.path(), &["score"]);
    assert_eq!(out.trim(), "0.0");

    let (_, _, code) = run_cli(home.path(), &["config", "get", "defaults.nope"]);
    assert_eq!(code, 1);
}

#[test]
fn test_config_list_and_reset() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["config", "set", "output.chart", "false"]);
    let json = parse_json(&run_cli_success(home.path(), &["config", "list"]));
    assert_eq!(json["output"]["chart"], false);

    run_cli_success(home.path(), &["config", "reset"]);
    let json = parse_json(&run_cli_success(home.path(), &["config", "list"]));
    assert_eq!(json["output"]["chart"], true);
}

#[test]
fn test_completions() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["completions", "bash"]);
    assert!(out.contains("burnout-cli"));
}

#[test]
fn test_assess_piped_output_has_no_color_codes() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["assess", "--hours-worked", "60"]);
    assert!(out.contains("High Risk") || out.contains("Moderate Risk"));
    assert!(!out.contains('\u{1b}'), "escape codes in piped output: {out:?}");
}

#[test]
fn test_share_copy_json_keeps_stdout_parseable() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(home.path(), &["share", "copy", "--json"]);
    assert_eq!(code, 0, "stderr: {stderr}");

    let json = parse_json(&stdout);
    assert_eq!(json["kind"], "success");
    if json["target"] == "terminal" {
        assert!(stderr.contains("My risk level is"), "stderr: {stderr}");
    }
}

#[test]
fn test_webhook_set_url_rejects_plain_http() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(
        home.path(),
        &["webhook", "set-url", "http://example.com/hook"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("must use https"), "stderr: {stderr}");
}
