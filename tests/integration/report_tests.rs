use maildedup::cli::OutputFormat;
use maildedup::config::RunConfig;
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

fn report(root: &Path, output: OutputFormat) -> String {
    let config = RunConfig::from_flags(root.to_path_buf(), false, false, false, false)
        .unwrap()
        .with_output(output);
    let mut out = Vec::new();
    let code = maildedup::run(&config, &mut out).unwrap();
    assert_eq!(code, ExitCode::Success);
    String::from_utf8(out).unwrap()
}

#[test]
fn test_text_report_scenario() {
    let dir = tempdir().unwrap();
    let one = write_message(dir.path(), "cur/1", "Subject: a\n\n\nbody\n");
    let two = write_message(dir.path(), "cur/2", "Subject: b\n\n\nbody\n");
    write_message(dir.path(), "new/3", "Subject: c\n\n\nother\n");

    let text = report(dir.path(), OutputFormat::Text);
    let expected = format!(
        "{} {}\n\
         ----------------------------------------\n\
         Files processed:    3\n\
         Duplicates found:   1\n\
         Duplicates removed: 0\n\
         ----------------------------------------\n",
        one.display(),
        two.display()
    );

    assert_eq!(text, expected);
    assert!(one.exists());
    assert!(two.exists());
}

#[test]
fn test_text_report_one_line_per_group() {
    let dir = tempdir().unwrap();
    write_message(dir.path(), "cur/a", "H: 1\n\n\nx\n");
    write_message(dir.path(), "cur/b", "H: 1\n\n\ny\n");
    write_message(dir.path(), "cur/c", "H: 1\n\n\nx\n");
    write_message(dir.path(), "cur/d", "H: 1\n\n\ny\n");
    write_message(dir.path(), "cur/e", "H: 1\n\n\nz\n");

    let text = report(dir.path(), OutputFormat::Text);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 7);
    assert!(lines[0].ends_with("cur/c"));
    assert!(lines[1].ends_with("cur/d"));
    assert_eq!(lines[3], "Files processed:    5");
    assert_eq!(lines[4], "Duplicates found:   2");
}

#[test]
fn test_json_report() {
    let dir = tempdir().unwrap();
    let one = write_message(dir.path(), "cur/1", "Subject: a\n\n\nbody\n");
    let two = write_message(dir.path(), "cur/2", "Subject: b\n\n\nbody\n");

    let text = report(dir.path(), OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["mode"], "body");
    assert_eq!(value["action"], "report");
    let files = value["duplicates"][0]["files"].as_array().unwrap();
    assert_eq!(files[0], one.to_string_lossy().as_ref());
    assert_eq!(files[1], two.to_string_lossy().as_ref());
    assert_eq!(value["duplicates"][0]["key"].as_str().unwrap().len(), 40);
    assert_eq!(value["summary"]["files_processed"], 2);
    assert_eq!(value["summary"]["duplicates_found"], 1);
    assert_eq!(value["summary"]["duplicates_removed"], 0);
    assert_eq!(value["summary"]["exit_code_name"], "MD000");
}

#[test]
fn test_report_twice_is_identical() {
    let dir = tempdir().unwrap();
    write_message(dir.path(), "cur/1", "Subject: a\n\n\nbody\n");
    write_message(dir.path(), "cur/2", "Subject: b\n\n\nbody\n");

    assert_eq!(
        report(dir.path(), OutputFormat::Text),
        report(dir.path(), OutputFormat::Text)
    );
}
