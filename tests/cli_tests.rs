//! End-to-end tests for the hexsed binary
//!
//! Each test runs the built binary with HOME pointed at a scratch directory so
//! a user's ~/.hexsed/config.toml cannot change the outcome.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn hexsed(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hexsed"))
        .args(args)
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run hexsed")
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_edited_bytes_go_to_stdout_only() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.bin");
    fs::write(&input, [0x41, 0x00, 0x41, 0x42]).unwrap();

    let output = hexsed(temp_dir.path(), &["/41/43/s", input.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(output.stdout, vec![0x43, 0x00, 0x43, 0x42]);
    assert!(output.stderr.is_empty(), "stderr: {}", stderr_text(&output));
    // The input file is never modified
    assert_eq!(fs::read(&input).unwrap(), vec![0x41, 0x00, 0x41, 0x42]);
}

#[test]
fn test_count_report_goes_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    fs::write(&input, "xAyAzA").unwrap();

    let output = hexsed(temp_dir.path(), &["-n", "=2/41/d", input.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(output.stdout, b"xyzA");
    assert_eq!(stderr_text(&output), "Did 2 deletions.\n");
}

#[test]
fn test_substitution_report_noun() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    fs::write(&input, "none here").unwrap();

    let output = hexsed(temp_dir.path(), &["-n", "/7A/79/s", input.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(output.stdout, b"none here");
    assert_eq!(stderr_text(&output), "Did 0 substitutions.\n");
}

#[test]
fn test_bad_expression_reported_before_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.bin");

    let output = hexsed(temp_dir.path(), &["/41/41/d", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = stderr_text(&output);
    assert!(stderr.contains("Badly formed expression"), "stderr: {}", stderr);
    assert!(stderr.contains("/41/41/d"));
    assert!(!stderr.contains("No such file"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_hex_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.bin");
    fs::write(&input, "AB").unwrap();

    let output = hexsed(temp_dir.path(), &["/41/XY/s", input.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_text(&output).contains("Invalid hex chars in replace segment: XY"));
}

#[test]
fn test_missing_file_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.bin");

    let output = hexsed(temp_dir.path(), &["/41/d", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_text(&output).contains("No such file"));
}

#[test]
fn test_converter_prints_hex() {
    let temp_dir = TempDir::new().unwrap();

    let output = hexsed(temp_dir.path(), &["-s", "A\\n"]);
    assert!(output.status.success());
    assert_eq!(output.stdout, b"410A\n");

    let output = hexsed(temp_dir.path(), &["-i", "300"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("-i"));
}

#[test]
fn test_unwritable_log_dir_does_not_block_edit() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".hexsed");
    fs::create_dir_all(&config_dir).unwrap();
    // A regular file where the log directory should be
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!(
            "[logging]\ndebug = true\nlog_file = \"{}\"\n",
            blocker.join("hexsed.log").display()
        ),
    )
    .unwrap();

    let input = temp_dir.path().join("input.txt");
    fs::write(&input, "AB").unwrap();

    let output = hexsed(temp_dir.path(), &["/41/d", input.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr_text(&output));
    assert_eq!(output.stdout, b"B");
    assert!(stderr_text(&output).contains("Could not create log file"));
}
