use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

const SMALL_ROSTER: &str = "\
BANDARI BHAVANA
217023026072
Present
Absent
ANIVENI RANIKA
217023026001
Present
Absent
";

const SORTED_TEMPLATE: &str = "\
217023026001
Present
Absent
217023026072
Present
Absent
";

/// Running the CLI with no subcommand should default to normalize and
/// read the roster from stdin.
#[test]
fn default_command_normalizes_stdin() {
    assert_cmd::cargo::cargo_bin_cmd!("roster-cli")
        .write_stdin(SMALL_ROSTER)
        .assert()
        .success()
        .stdout(SORTED_TEMPLATE);
}

/// normalize with a file argument should emit the sorted template.
#[test]
fn normalize_sorts_roster_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("roster.txt");
    fs::write(&path, SMALL_ROSTER).expect("write roster");

    assert_cmd::cargo::cargo_bin_cmd!("roster-cli")
        .arg("normalize")
        .arg(&path)
        .assert()
        .success()
        .stdout(SORTED_TEMPLATE);
}

/// `-` as the input argument reads stdin.
#[test]
fn normalize_dash_reads_stdin() {
    assert_cmd::cargo::cargo_bin_cmd!("roster-cli")
        .arg("normalize")
        .arg("-")
        .write_stdin(SMALL_ROSTER)
        .assert()
        .success()
        .stdout(SORTED_TEMPLATE);
}

/// normalize --json emits the sorted records, names included.
#[test]
fn normalize_json_keeps_names_sorted() {
    assert_cmd::cargo::cargo_bin_cmd!("roster-cli")
        .arg("normalize")
        .arg("--json")
        .write_stdin(SMALL_ROSTER)
        .assert()
        .success()
        .stdout(predicate::str::contains("ANIVENI RANIKA"))
        .stdout(predicate::str::contains("217023026072"));
}

/// Malformed input (line count not a multiple of 4) must fail with no
/// template output.
#[test]
fn normalize_rejects_incomplete_block() {
    assert_cmd::cargo::cargo_bin_cmd!("roster-cli")
        .arg("normalize")
        .write_stdin("NAME\n1\nPresent\nAbsent\nTRAILING NAME\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("incomplete record starts at line 5"));
}

/// check reports the record count for a well-formed roster.
#[test]
fn check_reports_record_count() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("roster.txt");
    fs::write(&path, SMALL_ROSTER).expect("write roster");

    assert_cmd::cargo::cargo_bin_cmd!("roster-cli")
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 records"));
}

/// check fails (non-zero exit) on a malformed roster.
#[test]
fn check_fails_on_malformed_roster() {
    assert_cmd::cargo::cargo_bin_cmd!("roster-cli")
        .arg("check")
        .write_stdin("only\nthree\nlines\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed roster input"));
}

/// summary flags duplicate identifiers.
#[test]
fn summary_reports_duplicates() {
    let duplicated = "\
X
5
Present
Absent
Y
5
Present
Absent
";
    assert_cmd::cargo::cargo_bin_cmd!("roster-cli")
        .arg("summary")
        .write_stdin(duplicated)
        .assert()
        .success()
        .stdout(predicate::str::contains("Records: 2"))
        .stdout(predicate::str::contains("Distinct identifiers: 1"))
        .stdout(predicate::str::contains("5 x2"));
}

/// summary --json emits the machine-readable summary.
#[test]
fn summary_json_emits_counts() {
    assert_cmd::cargo::cargo_bin_cmd!("roster-cli")
        .arg("summary")
        .arg("--json")
        .write_stdin(SMALL_ROSTER)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_records\": 2"))
        .stdout(predicate::str::contains("\"duplicates\": []"));
}

/// Empty stdin is a valid (empty) roster: success, no output.
#[test]
fn normalize_accepts_empty_input() {
    assert_cmd::cargo::cargo_bin_cmd!("roster-cli")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
