mod fixtures;

use fixtures::get_test_fixture_path;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn eqsolve(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_eqsolve"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn eqsolve_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_eqsolve"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().expect("Failed to wait for command")
}

fn fixture(name: &str) -> String {
    get_test_fixture_path(name).to_str().unwrap().to_string()
}

#[test]
fn test_cli_help() {
    let output = eqsolve(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("eqsolve"));
    assert!(stdout.contains("--path"));
    assert!(stdout.contains("--variable"));
    assert!(stdout.contains("--operator"));
    assert!(stdout.contains("--format"));
}

#[test]
fn test_cli_requires_target() {
    let output = eqsolve(&["--path", &fixture("long.txt")]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Nothing to solve"));
}

#[test]
fn test_cli_invalid_path() {
    let output = eqsolve(&["--path", "/nonexistent/equations.txt", "-x", "a"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does not exist") || stderr.contains("Invalid arguments"));
}

#[test]
fn test_cli_solves_variables() {
    let output = eqsolve(&["--path", &fixture("long.txt"), "-x", "x", "-x", "s"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "x = 45496\ns = 7843428\n");
}

#[test]
fn test_cli_reports_no_solution() {
    let output = eqsolve(&["--path", &fixture("loop.txt"), "--variable", "look1"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "look1 = no solution (cycle through 'look1')\n");
}

#[test]
fn test_cli_json_output() {
    let output = eqsolve(&[
        "--path",
        &fixture("undefined.txt"),
        "--all",
        "--format",
        "json",
    ]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "solutions": [
                {
                    "variable": "x",
                    "value": null,
                    "reason": {"kind": "undefined_variable", "variable": "y"}
                },
                {
                    "variable": "z",
                    "value": null,
                    "reason": {"kind": "undefined_variable", "variable": "y"}
                }
            ]
        })
    );
}

#[test]
fn test_cli_malformed_input_fails() {
    let output = eqsolve(&["--path", &fixture("malformed.txt"), "-x", "a"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Malformed equation"));
    assert!(stderr.contains("line 3"));
}

#[test]
fn test_cli_reads_stdin() {
    let output = eqsolve_with_stdin(&["-x", "b"], "a = 1 # 2\nb = a # 4\n");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "b = 7\n");
}

#[test]
fn test_cli_operator_flag() {
    let output = eqsolve_with_stdin(
        &["--path", "-", "-x", "a", "--operator", "max"],
        "a = 3 # 9 # 4",
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "a = 9\n");
}

#[test]
fn test_cli_invalid_operator() {
    let output = eqsolve(&["-x", "a", "--operator", "pow"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown operator") || stderr.contains("invalid value"));
}

#[test]
fn test_cli_config_and_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("solver.yaml");
    fs::write(&config_path, "operator: max\nmax_depth: 8\n").unwrap();
    let out_path = temp_dir.path().join("out.txt");

    let output = eqsolve(&[
        "--path",
        &fixture("long.txt"),
        "-x",
        "x",
        "--config",
        config_path.to_str().unwrap(),
        "-O",
        out_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(&out_path).unwrap(), "x = 9083\n");
}

#[test]
fn test_cli_default_run_keeps_stderr_clean() {
    let output = eqsolve(&["--path", &fixture("loop.txt"), "-x", "look1", "-x", "look"]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_cli_verbose_logs_summary() {
    let output = eqsolve(&["--path", &fixture("loop.txt"), "-x", "look1", "-v"]);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("solved 0 of 1 variables"));
    assert!(!stderr.contains("evaluating"));
}

#[test]
fn test_cli_quiet_suppresses_info() {
    let output = eqsolve(&["--path", &fixture("loop.txt"), "-x", "look1", "-vv", "-q"]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}
