#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const INPUT: &str = "\
,,,,,,01-Jan,02-Jan,03-Jan\n\
SL.No,Associate Name,Gender,Reporting to,Support,Location,Thu,Fri,Sat\n\
1,Asha,F,Priya,Payments,Chennai,,,\n\
2,Naveen,M,Priya,Payments,Chennai,Leave,,\n";

fn cmd() -> Command {
    Command::cargo_bin("rosterly-cli").unwrap()
}

#[test]
fn build_writes_the_grid_and_reports_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("employees.csv");
    let out = dir.path().join("grid.csv");
    fs::write(&input, INPUT).unwrap();

    cmd()
        .args([
            "build",
            "--csv",
            input.to_str().unwrap(),
            "--year",
            "2026",
            "--month",
            "1",
            "--bg-rotate",
            "Naveen",
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Employees: 2, Days: 31"));

    let body = fs::read_to_string(&out).unwrap();
    assert!(body.contains("Asha"));
    // Override congé de Naveen le 1er janvier.
    assert!(body.lines().any(|l| l.starts_with("2,Naveen") && l.contains("Leave")));
    // Bloc de totaux présent.
    assert!(body.contains("WO Count"));
}

#[test]
fn build_emits_json_and_report_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("employees.csv");
    fs::write(&input, INPUT).unwrap();
    let out = dir.path().join("grid.csv");
    let json = dir.path().join("roster.json");
    let report = dir.path().join("report.csv");

    cmd()
        .args([
            "build",
            "--csv",
            input.to_str().unwrap(),
            "--year",
            "2026",
            "--month",
            "1",
            "--g-only",
            "Ghost",
            "--out",
            out.to_str().unwrap(),
            "--out-json",
            json.to_str().unwrap(),
            "--report",
            report.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Ghost"));

    let doc: serde_json::Value = serde_json::from_slice(&fs::read(&json).unwrap()).unwrap();
    assert_eq!(doc["employees"].as_array().unwrap().len(), 2);
    assert_eq!(doc["days"].as_array().unwrap().len(), 31);

    let rep = fs::read_to_string(&report).unwrap();
    assert!(rep.starts_with("Level,Message"));
    assert!(rep.contains("WARNING"));
}

#[test]
fn check_exits_2_on_findings() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("employees.csv");
    // Nom en double -> WARNING attendu.
    let dup = INPUT.replace("2,Naveen", "2,Asha");
    fs::write(&input, dup).unwrap();

    cmd()
        .args([
            "check",
            "--csv",
            input.to_str().unwrap(),
            "--year",
            "2026",
            "--month",
            "1",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Duplicate"));
}

#[test]
fn check_is_quiet_on_clean_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("employees.csv");
    fs::write(&input, INPUT).unwrap();

    cmd()
        .args([
            "check",
            "--csv",
            input.to_str().unwrap(),
            "--year",
            "2026",
            "--month",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: no findings"));
}

#[test]
fn malformed_table_is_a_fatal_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("employees.csv");
    fs::write(&input, ",,,,,,01-Jan\nSL.No,Associate Name\n").unwrap();

    cmd()
        .args([
            "check",
            "--csv",
            input.to_str().unwrap(),
            "--year",
            "2026",
            "--month",
            "1",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("need a title row"));
}

#[test]
fn legend_lists_known_codes() {
    cmd()
        .arg("legend")
        .assert()
        .success()
        .stdout(predicate::str::contains("CO-HO"))
        .stdout(predicate::str::contains("Weekly Off"));
}
