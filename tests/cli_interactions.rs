//! CLI options interaction tests
//!
//! These tests validate that CLI options, environment variables and the
//! `.env` file combine in the right order and that conflicts are rejected.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const SHAPE_A_LOG: &str = "100,1500\n200,2500\n300,500\n";

const ENV_VARS: &[&str] = &[
    "RTT_INPUT_PATH",
    "RTT_FIELD_INDEX",
    "TIMESTAMP_FIELD_INDEX",
    "EXCEED_THRESHOLD_MS",
    "SKIP_BLANK_LINES",
    "PARSE_MODE",
    "OUTPUT_FORMAT",
    "ENABLE_COLOR",
];

/// Helper function to create a test command in a clean working directory
fn create_test_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rtts").unwrap();
    cmd.current_dir(dir.path());
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Helper function to create a working directory holding a log and optional .env
fn create_workspace(log: &str, env_file: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rtt_times.csv"), log).unwrap();
    if let Some(content) = env_file {
        fs::write(dir.path().join(".env"), content).unwrap();
    }
    dir
}

#[test]
fn test_help_and_version() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--threshold"))
        .stdout(predicate::str::contains("--lenient"))
        .stdout(predicate::str::contains("--shape"));

    create_test_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_print_env_example() {
    let dir = TempDir::new().unwrap();

    create_test_cmd(&dir)
        .arg("--print-env-example")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXCEED_THRESHOLD_MS"))
        .stdout(predicate::str::contains("TIMESTAMP_FIELD_INDEX"));
}

#[test]
fn test_conflicting_flags() {
    let dir = create_workspace(SHAPE_A_LOG, None);

    let conflicts: &[&[&str]] = &[
        &["--strict", "--lenient"],
        &["--color", "--no-color"],
        &["--timestamp-field", "0", "--no-timestamp"],
    ];

    for args in conflicts {
        create_test_cmd(&dir)
            .args(*args)
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Cannot specify both"));
    }
}

#[test]
fn test_invalid_argument_values() {
    let dir = create_workspace(SHAPE_A_LOG, None);

    // Rejected by clap itself
    for args in [
        vec!["--shape", "c"],
        vec!["--threshold", "-1"],
        vec!["--threshold", "fast"],
        vec!["--format", "xml"],
        vec!["--rtt-field", "one"],
    ] {
        create_test_cmd(&dir).args(&args).assert().code(2);
    }
}

#[test]
fn test_same_column_for_rtt_and_timestamp() {
    let dir = create_workspace(SHAPE_A_LOG, None);

    create_test_cmd(&dir)
        .args(["--no-color", "--rtt-field", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CONFIG").or(predicate::str::contains("VALIDATION")));
}

#[test]
fn test_env_var_sets_threshold() {
    let dir = create_workspace(SHAPE_A_LOG, None);

    create_test_cmd(&dir)
        .arg("--no-color")
        .env("EXCEED_THRESHOLD_MS", "2000")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Above 2000ms: 1, total: 3"));
}

#[test]
fn test_cli_overrides_env_var() {
    let dir = create_workspace(SHAPE_A_LOG, None);

    create_test_cmd(&dir)
        .args(["--no-color", "--threshold", "400"])
        .env("EXCEED_THRESHOLD_MS", "2000")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Above 400ms: 3, total: 3"));
}

#[test]
fn test_env_file_is_loaded() {
    let dir = create_workspace(
        SHAPE_A_LOG,
        Some("EXCEED_THRESHOLD_MS=1000\nTIMESTAMP_FIELD_INDEX=none\n"),
    );

    create_test_cmd(&dir)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Above 1000ms: 2, total: 3"))
        .stdout(predicate::str::contains("Duration").not());
}

#[test]
fn test_process_env_wins_over_env_file() {
    let dir = create_workspace(SHAPE_A_LOG, Some("EXCEED_THRESHOLD_MS=1000\n"));

    create_test_cmd(&dir)
        .arg("--no-color")
        .env("EXCEED_THRESHOLD_MS", "3000")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Above 3000ms: 0, total: 3"));
}

#[test]
fn test_invalid_env_value() {
    let dir = create_workspace(SHAPE_A_LOG, None);

    create_test_cmd(&dir)
        .arg("--no-color")
        .env("RTT_FIELD_INDEX", "second")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("RTT_FIELD_INDEX"));
}

#[test]
fn test_env_input_path_and_positional_override() {
    let dir = create_workspace(SHAPE_A_LOG, None);
    fs::write(dir.path().join("other.csv"), "0,10\n").unwrap();

    create_test_cmd(&dir)
        .arg("--no-color")
        .env("RTT_INPUT_PATH", "other.csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Num: 1"));

    create_test_cmd(&dir)
        .args(["--no-color", "rtt_times.csv"])
        .env("RTT_INPUT_PATH", "other.csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Num: 3"));
}

#[test]
fn test_explicit_fields_override_shape() {
    let dir = create_workspace("x,4000,y,1\nx,7000,y,2\n", None);

    create_test_cmd(&dir)
        .args(["--no-color", "--shape", "b", "--rtt-field", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Average Rtt: 5500"))
        .stdout(predicate::str::contains("Duration").not());
}

#[test]
fn test_output_format_from_env() {
    let dir = create_workspace(SHAPE_A_LOG, None);

    let output = create_test_cmd(&dir)
        .env("OUTPUT_FORMAT", "json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 3);
}

#[test]
fn test_debug_output_goes_to_stderr() {
    let dir = create_workspace(SHAPE_A_LOG, None);

    create_test_cmd(&dir)
        .args(["--no-color", "--debug"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Above 5000ms: 0, total: 3"))
        .stderr(predicate::str::contains("Configuration Summary"))
        .stderr(predicate::str::contains("Supported environment variables"));
}
