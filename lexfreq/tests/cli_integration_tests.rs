// lexfreq/tests/cli_integration_tests.rs
//! Command-line integration tests for the `lexfreq` executable.
//!
//! These tests run the real binary with `assert_cmd`, feed it input via
//! stdin or temporary files, and assert on the rendered output. Table
//! output is requested on a piped stdout, so no ANSI color codes appear
//! and plain-text assertions are reliable.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE: &str = "the cat sat on the mat the cat ran";

fn run_lexfreq(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("lexfreq").unwrap();
    cmd.args(args);
    cmd.write_stdin(input);
    cmd.assert()
}

#[test]
fn test_default_table_output() {
    run_lexfreq(SAMPLE, &["-q"])
        .success()
        .stdout(predicate::str::contains("HL PERCENT     66%"))
        .stdout(predicate::str::contains("ZIPFIAN        NO"))
        .stdout(predicate::str::contains("WORDS          9"))
        .stdout(predicate::str::contains("1st"))
        .stdout(predicate::str::contains("the"));
}

#[test]
fn test_empty_input_renders_not_applicable() {
    run_lexfreq("", &["-q"])
        .success()
        .stdout(predicate::str::contains("ENTROPY        N/A"))
        .stdout(predicate::str::contains("HL PERCENT     N/A"))
        .stdout(predicate::str::contains("ZIPFIAN        N/A"));
}

#[test]
fn test_json_output_shape() -> Result<()> {
    let assert = run_lexfreq(SAMPLE, &["-q", "--format", "json"]).success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: serde_json::Value = serde_json::from_str(&stdout)?;

    assert_eq!(value["distribution"][0]["token"], "the");
    assert_eq!(value["distribution"][0]["count"], 3);
    assert_eq!(value["hapax_percent"], 66);
    assert_eq!(value["zipf_verdict"], "NO");
    assert!(value["entropy"].as_f64().is_some());
    Ok(())
}

#[test]
fn test_json_empty_input_uses_nulls() -> Result<()> {
    let assert = run_lexfreq("", &["-q", "--format", "json"]).success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: serde_json::Value = serde_json::from_str(&stdout)?;

    assert!(value["entropy"].is_null());
    assert!(value["hapax_percent"].is_null());
    assert!(value["zipf_verdict"].is_null());
    assert_eq!(value["distribution"].as_array().map(Vec::len), Some(0));
    Ok(())
}

#[test]
fn test_char_mode_counts_characters() -> Result<()> {
    let assert = run_lexfreq("aab", &["-q", "--chars", "--format", "json"]).success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: serde_json::Value = serde_json::from_str(&stdout)?;

    assert_eq!(value["distribution"][0]["token"], "a");
    assert_eq!(value["distribution"][0]["count"], 2);
    assert_eq!(value["distribution"][1]["token"], "b");
    Ok(())
}

#[test]
fn test_file_input() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(SAMPLE.as_bytes())?;

    let mut cmd = Command::cargo_bin("lexfreq")?;
    cmd.args(["-q", file.path().to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("HL PERCENT     66%"));
    Ok(())
}

#[test]
fn test_missing_input_file_fails_with_context() {
    let mut cmd = Command::cargo_bin("lexfreq").unwrap();
    cmd.args(["-q", "/nonexistent/input.txt"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn test_config_file_drives_analysis() -> Result<()> {
    let mut config = NamedTempFile::new()?;
    config.write_all(b"word_split: false\nremove_space: true\n")?;

    let assert = run_lexfreq(
        "aab",
        &[
            "-q",
            "--format",
            "json",
            "--config",
            config.path().to_str().unwrap(),
        ],
    )
    .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: serde_json::Value = serde_json::from_str(&stdout)?;

    assert_eq!(value["distribution"][0]["token"], "a");
    assert_eq!(value["distribution"][0]["count"], 2);
    Ok(())
}

#[test]
fn test_top_limits_table_rows() {
    run_lexfreq("a a a b b c", &["-q", "--top", "2"])
        .success()
        .stdout(predicate::str::contains("1st"))
        .stdout(predicate::str::contains("2nd"))
        .stdout(predicate::str::contains("3rd").not());
}

#[test]
fn test_case_sensitive_flag() -> Result<()> {
    let assert =
        run_lexfreq("The the", &["-q", "--case-sensitive", "--format", "json"]).success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: serde_json::Value = serde_json::from_str(&stdout)?;

    assert_eq!(value["distribution"].as_array().map(Vec::len), Some(2));
    Ok(())
}
