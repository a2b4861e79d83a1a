//! Integration tests for the elementa CLI.
//!
//! Run with: `cargo test --package elementa-cli --test cli_integration`

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const ENV_KEYS: &[&str] = &[
    "ELEMENTA_WIDTH",
    "ELEMENTA_MAX_GENERATIONS",
    "ELEMENTA_INTERVAL_MS",
    "ELEMENTA_RULE",
    "RUST_LOG",
];

/// Build an elementa command isolated from the user's config and environment.
fn elementa(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_elementa"));
    cmd.current_dir(config_dir)
        .env("ELEMENTA_CONFIG", config_dir.join("config.json"));
    for key in ENV_KEYS {
        cmd.env_remove(key);
    }
    cmd
}

/// Helper to run elementa with given arguments.
fn run_elementa(config_dir: &Path, args: &[&str]) -> Output {
    elementa(config_dir)
        .args(args)
        .output()
        .expect("Failed to execute elementa command")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

const RULE_ONE_RUN: &[&str] = &[
    "run",
    "--rule",
    "1",
    "--width",
    "5",
    "--max-generations",
    "3",
    "--interval-ms",
    "1",
    "--alive",
    "#",
    "--dead",
    ".",
];

// =============================================================================
// Run Command Tests
// =============================================================================

#[test]
fn test_run_prints_every_generation_and_counter() {
    let temp = TempDir::new().unwrap();

    let output = run_elementa(temp.path(), RULE_ONE_RUN);

    assert!(output.status.success(), "elementa run should succeed");
    assert_eq!(
        stdout_lines(&output),
        vec!["..#..", "#...#", "..#..", "#...#", "generations: 3"]
    );
}

#[test]
fn test_run_json_output() {
    let temp = TempDir::new().unwrap();
    let mut args = RULE_ONE_RUN.to_vec();
    args.extend(["--format", "json"]);

    let output = run_elementa(temp.path(), &args);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 5, "seed, three generations, final status");

    let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(first["cells"], serde_json::json!([0, 0, 1, 0, 0]));
    assert_eq!(first["row"], 0);

    let status: serde_json::Value = serde_json::from_str(&lines[4]).unwrap();
    assert_eq!(status["generation_count"], 3);
    assert_eq!(status["is_running"], false);
    assert_eq!(status["rule"], 1);
}

#[test]
fn test_run_clamps_to_3000_generations() {
    let temp = TempDir::new().unwrap();

    let output = run_elementa(
        temp.path(),
        &[
            "run",
            "--rule",
            "90",
            "--width",
            "3",
            "--max-generations",
            "10000000",
            "--interval-ms",
            "1",
            "--format",
            "json",
        ],
    );
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    let status: serde_json::Value = serde_json::from_str(lines.last().unwrap()).unwrap();
    assert_eq!(status["max_generations"], 3000);
    assert_eq!(status["generation_count"], 3000);
    assert_eq!(lines.len(), 3002);
}

#[test]
fn test_run_rejects_invalid_rule() {
    let temp = TempDir::new().unwrap();

    let output = run_elementa(temp.path(), &["run", "--rule", "thirty"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid rule number"), "stderr: {stderr}");
}

#[test]
fn test_run_rejects_zero_width() {
    let temp = TempDir::new().unwrap();

    let output = run_elementa(temp.path(), &["run", "--width", "0"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"), "stderr: {stderr}");
}

#[test]
fn test_run_negative_rule_uses_low_bits() {
    let temp = TempDir::new().unwrap();

    let output = run_elementa(
        temp.path(),
        &[
            "run", "--rule", "-255", "--width", "5", "-m", "1", "-i", "1", "-f", "json",
        ],
    );
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    let status: serde_json::Value = serde_json::from_str(lines.last().unwrap()).unwrap();
    assert_eq!(status["rule"], 1);
}

#[test]
fn test_run_reads_environment() {
    let temp = TempDir::new().unwrap();

    let output = elementa(temp.path())
        .env("ELEMENTA_WIDTH", "3")
        .env("ELEMENTA_MAX_GENERATIONS", "1")
        .env("ELEMENTA_INTERVAL_MS", "1")
        .env("ELEMENTA_RULE", "1")
        .args(["run", "--alive", "#", "--dead", "."])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![".#.", "...", "generations: 1"]
    );
}

#[test]
fn test_interactive_start_from_stdin() {
    let temp = TempDir::new().unwrap();

    let mut child = elementa(temp.path())
        .args([
            "run",
            "--interactive",
            "--width",
            "5",
            "-m",
            "3",
            "-i",
            "1",
            "--alive",
            "#",
            "--dead",
            ".",
        ])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Typing a rule number and pressing Enter is the Start button.
    child.stdin.take().unwrap().write_all(b"1\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["..#..", "#...#", "..#..", "#...#", "generations: 3"]
    );
}

// =============================================================================
// Rule Command Tests
// =============================================================================

#[test]
fn test_rule_table() {
    let temp = TempDir::new().unwrap();

    let output = run_elementa(temp.path(), &["rule", "110"]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "rule 110 (01101110)");
    assert_eq!(lines[1], "111 110 101 100 011 010 001 000");
}

// =============================================================================
// Config Command Tests
// =============================================================================

#[test]
fn test_config_path_honours_override() {
    let temp = TempDir::new().unwrap();

    let output = run_elementa(temp.path(), &["config", "path"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().ends_with("config.json"));
    assert!(stdout.contains(&*temp.path().to_string_lossy()));
}

#[test]
fn test_config_set_persists_and_applies() {
    let temp = TempDir::new().unwrap();

    for (key, value) in [("width", "3"), ("max-generations", "1"), ("interval-ms", "1")] {
        let output = run_elementa(temp.path(), &["config", "set", key, value]);
        assert!(output.status.success(), "config set {key}");
    }
    assert!(temp.path().join("config.json").exists());

    let show = run_elementa(temp.path(), &["config", "show"]);
    let stdout = String::from_utf8_lossy(&show.stdout);
    assert!(stdout.contains("Width:            3"), "stdout: {stdout}");

    let output = run_elementa(
        temp.path(),
        &["run", "--rule", "1", "--alive", "#", "--dead", "."],
    );
    assert_eq!(
        stdout_lines(&output),
        vec![".#.", "...", "generations: 1"]
    );
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let temp = TempDir::new().unwrap();

    let output = run_elementa(temp.path(), &["config", "set", "colour", "red"]);

    assert!(!output.status.success());
    assert!(!temp.path().join("config.json").exists());
}
