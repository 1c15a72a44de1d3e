use maildedup::actions::remove_duplicates;
use maildedup::cli::OutputFormat;
use maildedup::config::{Action, RunConfig};
use maildedup::duplicates::DuplicateFinder;
use maildedup::error::ExitCode;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_message(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_remove_keeps_first_of_three() {
    let dir = tempdir().unwrap();
    let a = write_message(dir.path(), "cur/a", "H: a\n\n\nsame\n");
    let b = write_message(dir.path(), "cur/b", "H: b\n\n\nsame\n");
    let c = write_message(dir.path(), "cur/c", "H: c\n\n\nsame\n");

    let finder = DuplicateFinder::with_defaults();
    let (index, mut stats) = finder.find_duplicates(dir.path()).unwrap();
    let removed = remove_duplicates(&index, &mut stats).unwrap();

    assert_eq!(removed, 2);
    assert_eq!(stats.duplicates_removed, 2);
    assert_eq!(stats.duplicates_found, stats.duplicates_removed);
    assert!(a.exists());
    assert!(!b.exists());
    assert!(!c.exists());
}

#[test]
fn test_remove_leaves_unique_messages() {
    let dir = tempdir().unwrap();
    let a = write_message(dir.path(), "cur/a", "H: a\n\n\none\n");
    let b = write_message(dir.path(), "cur/b", "H: b\n\n\ntwo\n");

    let finder = DuplicateFinder::with_defaults();
    let (index, mut stats) = finder.find_duplicates(dir.path()).unwrap();
    let removed = remove_duplicates(&index, &mut stats).unwrap();

    assert_eq!(removed, 0);
    assert!(a.exists());
    assert!(b.exists());
}

#[test]
fn test_force_then_print_reports_nothing() {
    let dir = tempdir().unwrap();
    write_message(dir.path(), "cur/1", "H: 1\n\n\nx\n");
    write_message(dir.path(), "cur/2", "H: 2\n\n\nx\n");
    write_message(dir.path(), "new/3", "H: 3\n\n\ny\n");
    write_message(dir.path(), "new/4", "H: 4\n\n\ny\n");

    let force = RunConfig::from_flags(dir.path().to_path_buf(), false, false, false, true).unwrap();
    let mut out = Vec::new();
    assert_eq!(maildedup::run(&force, &mut out).unwrap(), ExitCode::Success);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Duplicates found:   2"));
    assert!(text.contains("Duplicates removed: 2"));

    let print = RunConfig::from_flags(dir.path().to_path_buf(), false, false, true, false).unwrap();
    let mut out = Vec::new();
    maildedup::run(&print, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "----------------------------------------");
    assert_eq!(lines[1], "Files processed:    2");
    assert_eq!(lines[2], "Duplicates found:   0");
}

#[test]
fn test_force_text_output_has_no_group_lines() {
    let dir = tempdir().unwrap();
    write_message(dir.path(), "cur/1", "H: 1\n\n\nx\n");
    write_message(dir.path(), "cur/2", "H: 2\n\n\nx\n");

    let config = RunConfig::from_flags(dir.path().to_path_buf(), false, false, false, true).unwrap();
    assert_eq!(config.action, Action::Remove);
    let mut out = Vec::new();
    maildedup::run(&config, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 5);
    assert!(!text.contains("cur/1"));
}

#[test]
fn test_force_json_output_lists_removed_groups() {
    let dir = tempdir().unwrap();
    write_message(dir.path(), "cur/1", "H: 1\n\n\nx\n");
    let dup = write_message(dir.path(), "cur/2", "H: 2\n\n\nx\n");

    let config = RunConfig::from_flags(dir.path().to_path_buf(), false, false, false, true)
        .unwrap()
        .with_output(OutputFormat::Json);
    let mut out = Vec::new();
    maildedup::run(&config, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["action"], "remove");
    assert_eq!(value["summary"]["duplicates_removed"], 1);
    assert_eq!(value["duplicates"].as_array().unwrap().len(), 1);
    assert!(!dup.exists());
}
