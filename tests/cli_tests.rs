#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use std::fs;
use tempfile::NamedTempFile;

#[allow(deprecated)]
fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.write_stdin(script.to_string()).assert()
}

fn temp_path(tmp: &NamedTempFile) -> String {
    tmp.path().to_string_lossy().replace('\\', "\\\\")
}

#[test]
fn cli_shows_entries_for_a_day() {
    run_cli("day 2024-09-26\nquit\n")
        .success()
        .stdout(str_contains("Contribution Sprints"))
        .stdout(str_contains("Caktus Group"));
}

#[test]
fn cli_reports_days_without_entries() {
    run_cli("day 2024-10-01\nquit\n")
        .success()
        .stdout(str_contains("No fixed entries on 2024-10-01."));
}

#[test]
fn cli_validates_presenter_file() {
    let tmp = NamedTempFile::new().expect("create temp file");
    fs::write(tmp.path(), r#"{"name": "Ada Lovelace"}"#).expect("write mapping");
    let script = format!("validate presenter {}\nquit\n", temp_path(&tmp));
    run_cli(&script)
        .success()
        .stdout(str_contains("Valid presenter."))
        .stdout(str_contains("/presenters/ada-lovelace/"));
}

#[test]
fn cli_reports_validation_errors() {
    let tmp = NamedTempFile::new().expect("create temp file");
    fs::write(tmp.path(), r#"{"category": "keynote"}"#).expect("write mapping");
    let script = format!("validate schedule {}\nquit\n", temp_path(&tmp));
    run_cli(&script)
        .success()
        .stdout(str_contains("Validation failed: field 'category'"));
}

#[test]
fn cli_exports_the_table() {
    let tmp = NamedTempFile::new().expect("create temp file");
    let script = format!("export csv {}\nquit\n", temp_path(&tmp));
    run_cli(&script)
        .success()
        .stdout(str_contains("Exported 33 entries to"));
    let written = fs::read_to_string(tmp.path()).expect("read export");
    assert!(written.starts_with("datetime,end_datetime,group"));
}

#[test]
fn cli_unknown_command() {
    run_cli("frobnicate\nquit\n")
        .success()
        .stdout(str_contains("Unknown command. Type 'help'."));
}
