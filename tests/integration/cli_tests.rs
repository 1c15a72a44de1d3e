use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn maildedup(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_maildedup"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_help_exits_with_usage_code() {
    let output = maildedup(&["--help"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_version_exits_with_usage_code() {
    let output = maildedup(&["--version"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_maildir_is_usage_error() {
    let output = maildedup(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_conflicting_flags_are_usage_errors() {
    let dir = tempdir().unwrap();
    let root = dir.path().to_str().unwrap();

    assert_eq!(maildedup(&["-b", "-m", root]).status.code(), Some(2));
    assert_eq!(maildedup(&["-p", "-f", root]).status.code(), Some(2));
}

#[test]
fn test_successful_run_exits_zero() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("cur")).unwrap();
    fs::write(dir.path().join("cur/1"), "H: 1\n\n\nx\n").unwrap();
    fs::write(dir.path().join("cur/2"), "H: 2\n\n\nx\n").unwrap();

    let output = maildedup(&[dir.path().to_str().unwrap()]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Duplicates found:   1"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_verbose_force_logs_removals_to_stderr() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("cur")).unwrap();
    fs::write(dir.path().join("cur/1"), "H: 1\n\n\nx\n").unwrap();
    fs::write(dir.path().join("cur/2"), "H: 2\n\n\nx\n").unwrap();

    let output = maildedup(&["-v", "--force", dir.path().to_str().unwrap()]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr.contains("Removed duplicate"));
    assert!(!dir.path().join("cur/2").exists());
}

#[test]
fn test_missing_root_exits_one() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    let output = maildedup(&[missing.to_str().unwrap()]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("[MD001] Error:"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_json_errors_flag() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    let output = maildedup(&["--json-errors", missing.to_str().unwrap()]);
    let value: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(value["code"], "MD001");
    assert_eq!(value["exit_code"], 1);
}
