//! CLI tests for the fortnight binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn fortnight() -> Command {
    let mut cmd = Command::cargo_bin("fortnight").unwrap();
    cmd.env_remove("FORTNIGHT_CONFIG")
        .env_remove("RUST_LOG")
        .env("FORTNIGHT_TODAY", "2023-09-06");
    cmd
}

#[test]
fn test_generate_from_input() {
    fortnight()
        .args(["generate", "2023-9-1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("开始日期: 2023-09-01 周五\n9-1周五\n9-2周六\n"))
        .stdout(predicate::str::ends_with("9-14周四\n"));
}

#[test]
fn test_generate_default_anchor() {
    fortnight()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("开始日期: 2023-08-28 周一\n8-28周一\n"));
}

#[test]
fn test_generate_without_banner() {
    let output = fortnight()
        .args(["generate", "9/1", "--no-banner"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 14);
    assert!(!stdout.contains("开始日期"));
}

#[test]
fn test_generate_html() {
    fortnight()
        .args(["generate", "9/1", "--format", "html"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<table"))
        .stdout(predicate::str::contains("9-1周五</td></tr>"));
}

#[test]
fn test_generate_tagged() {
    fortnight()
        .args(["generate", "9/1", "--format", "tagged"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("FULL_START_DATE:2023-09-01 周五\n9-1周五\n"));
}

#[test]
fn test_generate_invalid_date() {
    fortnight()
        .args(["generate", "13/45"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_anchor() {
    fortnight()
        .arg("anchor")
        .assert()
        .success()
        .stdout("2023-08-28 周一\n");
}

#[test]
fn test_copy_dry_run() {
    fortnight()
        .args(["copy", "9/1", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("9-1周五\n"))
        .stdout(predicate::str::contains("FULL_START_DATE").not())
        .stderr(predicate::str::contains("Copied to clipboard (rich text)"));
}

#[test]
fn test_select_dry_run_strips_banner() {
    fortnight()
        .args(["select", "--dry-run"])
        .write_stdin("开始日期: 2023-09-01 周五\n9-1周五\n9-2周六")
        .assert()
        .success()
        .stdout("9-1周五\n9-2周六\n");
}

#[test]
fn test_config_file_styles_html() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[table]\nfont_family = \"Arial\"\n\n[selection]\nsettle_ms = 0").unwrap();

    fortnight()
        .args(["generate", "9/1", "--format", "html", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("font-family: Arial;"));
}

#[test]
fn test_bad_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[nonsense]").unwrap();

    fortnight()
        .args(["generate", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
