use std::fs;

use roster_cli::{input_label, read_input_text};
use tempfile::tempdir;

#[test]
fn read_input_text_reads_file_contents() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("roster.txt");
    fs::write(&path, "NAME\n1\nPresent\nAbsent\n").expect("write roster");

    let text = read_input_text(Some(path.to_str().expect("utf8 path"))).expect("read");
    assert_eq!(text, "NAME\n1\nPresent\nAbsent\n");
}

#[test]
fn read_input_text_errors_for_missing_file() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("missing.txt");

    let err = read_input_text(Some(path.to_str().expect("utf8 path"))).unwrap_err();
    assert!(err.to_string().contains("Failed to read roster input"), "unexpected error: {err}");
}

#[test]
fn input_label_uses_path_when_given() {
    assert_eq!(input_label(Some("rosters/section-a.txt")), "rosters/section-a.txt");
}

#[test]
fn input_label_falls_back_to_stdin() {
    assert_eq!(input_label(None), "stdin");
    assert_eq!(input_label(Some("-")), "stdin");
}
