//! Integration tests for the locs CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_locs(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_locs"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_help() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_locs(temp.path(), &["-help"]);

    assert!(success);
    assert!(stdout.contains("usage: locs"));
    assert!(stdout.contains("[-recurse]"));
    assert!(stdout.contains("[-extract]"));
}

#[test]
fn test_help_prefix() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_locs(temp.path(), &["-h"]);

    assert!(success);
    assert!(stdout.contains("usage: locs"));
}

#[test]
fn test_invalid_option() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.java"), "x=1\n");
    let (stdout, _, success) = run_locs(temp.path(), &["-bogus", "a.java"]);

    assert!(!success);
    assert!(stdout.contains("invalid option: -bogus"));
    // No scan happened, so no report either
    assert!(!stdout.contains("files in:"));
}

#[test]
fn test_bare_dash_is_rejected_as_ambiguous() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_locs(temp.path(), &["-"]);

    assert!(!success);
    assert!(stdout.contains("invalid option: -"));
}

#[test]
fn test_scan_single_file() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.java"), "// hi\nx=1\n");

    let (stdout, _, success) = run_locs(temp.path(), &["a.java"]);

    assert!(success);
    assert!(stdout.contains("1 *.java files in: [\"a.java\"]"));
    assert!(stdout.contains("1 comment (50.0%)"));
    assert!(stdout.contains("1 source (50.0%)"));
    assert!(stdout.contains("2 total lines"));
}

#[test]
fn test_scan_glob_pattern() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.java"), "x=1\n");
    write_file(&temp.path().join("b.java"), "y=2\n");
    write_file(&temp.path().join("c.txt"), "ignored\n");

    let (stdout, _, success) = run_locs(temp.path(), &["*.java"]);

    assert!(success);
    assert!(stdout.contains("2 *.java files in: [\"*.java\"]"));
    assert!(stdout.contains("2 source"));
}

#[test]
fn test_directory_skipped_without_recurse() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("sub/a.java"), "x=1\n");

    let (stdout, _, success) = run_locs(temp.path(), &["sub"]);

    assert!(success);
    assert!(stdout.contains("0 *.java files in: [\"sub\"]"));
    assert!(stdout.contains("0 total lines"));
}

#[test]
fn test_recurse() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("sub/a.java"), "x=1\n\n");
    write_file(&temp.path().join("sub/deeper/b.java"), "// note\ny=2\n");

    let (stdout, _, success) = run_locs(temp.path(), &["-recurse", "sub"]);

    assert!(success);
    assert!(stdout.contains("2 *.java files in: [\"sub\"]"));
    assert!(stdout.contains("1 blank"));
    assert!(stdout.contains("1 comment"));
    assert!(stdout.contains("2 source"));
    assert!(stdout.contains("4 total lines"));
}

#[test]
fn test_recurse_prefix_form() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("sub/a.java"), "x=1\n");

    let (stdout, _, success) = run_locs(temp.path(), &["-rec", "sub"]);

    assert!(success);
    assert!(stdout.contains("1 *.java files"));
}

#[test]
fn test_extract_writes_source_lines_in_scan_order() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.java"), "// only comment\nfirst();\n");
    write_file(&temp.path().join("b.java"), "second();\n");

    let (stdout, _, success) = run_locs(temp.path(), &["-extract", "*.java"]);

    assert!(success);
    assert!(stdout.contains("Extract all src into ./all_src.txt"));
    assert_eq!(
        fs::read_to_string(temp.path().join("all_src.txt")).unwrap(),
        "first();\nsecond();\n"
    );
}

#[test]
fn test_extract_line_suppressed_when_nothing_written() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.java"), "// comments only\n");

    let (stdout, _, success) = run_locs(temp.path(), &["-extract", "a.java"]);

    assert!(success);
    assert!(!stdout.contains("Extract all src into"));
    // The file is still created (and truncated) up front
    assert!(temp.path().join("all_src.txt").exists());
}

#[test]
fn test_double_dash_tolerated() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.java"), "x=1\n");

    let (stdout, _, success) = run_locs(temp.path(), &["--", "a.java"]);

    assert!(success);
    assert!(stdout.contains("1 *.java files"));
}

#[test]
fn test_no_roots_reports_zero_counts() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_locs(temp.path(), &[]);

    assert!(success);
    assert!(stdout.contains("0 *.java files in: []"));
    assert!(stdout.contains("0 blank, 0 comment, 0 source, 0 source+comment, 0 total lines"));
    assert!(stdout.contains("- lines/sec"));
}

#[test]
fn test_missing_root_is_not_an_error() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_locs(temp.path(), &["does_not_exist"]);

    assert!(success);
    assert!(stdout.contains("0 *.java files in: [\"does_not_exist\"]"));
}

#[test]
fn test_verbose_per_file_lines() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.java"), "// hi\nx=1\n");

    let (stdout, _, success) = run_locs(temp.path(), &["-verbose", "a.java"]);

    assert!(success);
    assert!(stdout.contains("file 1 a.java:"));
    assert!(stdout.contains("1 comment (50.0%)"));
}

#[test]
fn test_verbose_per_directory_subtotals() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("sub/a.java"), "x=1\n");

    let (stdout, _, success) = run_locs(temp.path(), &["-r", "-v", "sub"]);

    assert!(success);
    assert!(stdout.contains(" dir sub: ..."));
    assert!(stdout.contains(" dir sub: 0 blank (0.0%), 0 comment (0.0%), 1 source (100.0%)"));
}
