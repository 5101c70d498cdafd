//! Integration tests for the `canon` command.
//!
//! These tests cover:
//! - Canonicalizing paths passed as arguments and piped on stdin
//! - Style selection via --style and the PATHCANON_STYLE variable
//! - Output formats (plain, JSON, CSV)
//! - Exit codes for invalid paths and empty batches
//! - Trace logging under --verbose

use assert_cmd::Command;
use predicates::prelude::*;

fn pathcanon() -> Command {
    Command::cargo_bin("pathcanon").expect("Failed to find pathcanon binary")
}

// ============================================================================
// Plain Output
// ============================================================================

/// Test canonicalizing a single path argument.
#[test]
fn test_canon_single_path() {
    pathcanon()
        .args(["canon", "abc//123"])
        .assert()
        .success()
        .stdout("abc/123\n");
}

/// Test that multiple paths come out one per line, in input order.
#[test]
fn test_canon_multiple_paths_in_order() {
    pathcanon()
        .args(["canon", "/a/./b", "x/y/..", "/////z"])
        .assert()
        .success()
        .stdout("/a/b\nx\n/z\n");
}

/// Test that an invalid path fails with exit code 1.
#[test]
fn test_canon_invalid_path_exit_code() {
    pathcanon()
        .args(["canon", "/abc/../.."])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid path"))
        .stderr(predicate::str::contains("could not be canonicalized"));
}

/// Test that a failure does not hide results for the rest of the batch.
///
/// The whole batch is processed before the exit code is decided, so the
/// valid paths still appear on stdout in order.
#[test]
fn test_canon_batch_continues_after_failure() {
    let output = pathcanon()
        .args(["canon", "a/../x", "..", "b//c"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "x\nb/c\n");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no preceding component"));
    assert!(stderr.contains("1 of 3 paths could not be canonicalized"));
}

/// Test that the empty string is rejected for the POSIX style.
#[test]
fn test_canon_empty_posix_path_rejected() {
    pathcanon()
        .args(["canon", ""])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("empty path"));
}

// ============================================================================
// Stdin Batches
// ============================================================================

/// Test reading paths from stdin when no arguments are given.
#[test]
fn test_canon_reads_stdin() {
    pathcanon()
        .arg("canon")
        .write_stdin("abc//123\n./x\n")
        .assert()
        .success()
        .stdout("abc/123\nx\n");
}

/// Test that blank stdin lines are skipped.
#[test]
fn test_canon_stdin_skips_blank_lines() {
    pathcanon()
        .arg("canon")
        .write_stdin("\n\nabc\n\n")
        .assert()
        .success()
        .stdout("abc\n");
}

/// Test that an empty batch is an argument error, exit code 4.
#[test]
fn test_canon_empty_batch_is_invalid_arguments() {
    pathcanon()
        .arg("canon")
        .write_stdin("")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid arguments"));
}

// ============================================================================
// Style Selection
// ============================================================================

/// Test the EFI style via the --style flag.
#[test]
fn test_canon_efi_style_flag() {
    pathcanon()
        .args(["canon", "--style", "efi", "fs0:\\abc\\..\\boot"])
        .assert()
        .success()
        .stdout("fs0:\\boot\n");
}

/// Test that --style is case-insensitive.
#[test]
fn test_canon_style_flag_ignore_case() {
    pathcanon()
        .args(["canon", "--style", "EFI", "abc\\.\\123"])
        .assert()
        .success()
        .stdout("abc\\123\n");
}

/// Test that the empty string is a fixpoint for the EFI style.
#[test]
fn test_canon_empty_efi_path_unchanged() {
    pathcanon()
        .args(["canon", "--style", "efi", ""])
        .assert()
        .success()
        .stdout("\n");
}

/// Test the PATHCANON_STYLE environment variable.
#[test]
fn test_canon_style_env_variable() {
    pathcanon()
        .env("PATHCANON_STYLE", "efi")
        .args(["canon", "abc\\x\\..\\123"])
        .assert()
        .success()
        .stdout("abc\\123\n");
}

/// Test that the --style flag overrides PATHCANON_STYLE.
#[test]
fn test_canon_style_flag_overrides_env() {
    pathcanon()
        .env("PATHCANON_STYLE", "efi")
        .args(["canon", "--style", "posix", "a/b/.."])
        .assert()
        .success()
        .stdout("a\n");
}

// ============================================================================
// JSON and CSV Output
// ============================================================================

/// Test the JSON output format, including the error field for failures.
#[test]
fn test_canon_json_format() {
    let output = pathcanon()
        .args(["canon", "--format", "json", "/a/../b", ".."])
        .output()
        .unwrap();

    // One of the two paths failed
    assert_eq!(output.status.code(), Some(1));

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0]["input"], "/a/../b");
    assert_eq!(rows[0]["style"], "posix");
    assert_eq!(rows[0]["canonical"], "/b");
    assert!(rows[0]["error"].is_null());

    assert_eq!(rows[1]["input"], "..");
    assert!(rows[1]["canonical"].is_null());
    assert!(rows[1]["error"]
        .as_str()
        .unwrap()
        .contains("no preceding component"));
}

/// Test the JSON format via the PATHCANON_FORMAT environment variable.
#[test]
fn test_canon_format_env_variable() {
    let output = pathcanon()
        .env("PATHCANON_FORMAT", "json")
        .args(["canon", "abc//123"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["canonical"], "abc/123");
}

/// Test the CSV output format.
#[test]
fn test_canon_csv_format() {
    let output = pathcanon()
        .args(["canon", "--format", "csv", "abc//123", ".."])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("input,style,canonical,error"));

    let first = lines.next().unwrap();
    assert!(first.starts_with("abc//123,posix,abc/123,"));

    let second = lines.next().unwrap();
    assert!(second.starts_with("..,posix,,"));
    assert!(second.contains("no preceding component"));
}

// ============================================================================
// Trace Logging
// ============================================================================

/// Test that --trace with --verbose logs component tables to stderr.
#[test]
fn test_canon_trace_with_verbose_logs_tables() {
    let output = pathcanon()
        .args(["--verbose", "canon", "--trace", "/a/./b"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("DEBUG:"));
    assert!(stderr.contains("components"));

    // Stdout stays clean for scripting
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "/a/b\n");
}

/// Test that --trace without --verbose stays silent on stderr.
#[test]
fn test_canon_trace_without_verbose_is_silent() {
    let output = pathcanon()
        .args(["canon", "--trace", "/a/./b"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().is_empty());
}
