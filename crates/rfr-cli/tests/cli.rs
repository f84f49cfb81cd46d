//! End-to-end CLI tests.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn rfr() -> Command {
    Command::cargo_bin("rfr").unwrap()
}

#[test]
fn test_extrapolate_table_output() {
    rfr()
        .args([
            "extrapolate",
            "--tenors",
            "1,2,3",
            "--rates",
            "1.0,1.5,2.0",
            "--ufr",
            "4.0",
            "--alpha",
            "0.15",
            "--targets",
            "1,2,3,10,50",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maturity"))
        .stdout(predicate::str::contains("Zero Rate"));
}

#[test]
fn test_extrapolate_recovers_observations_in_csv() {
    rfr()
        .args([
            "extrapolate",
            "--format",
            "csv",
            "--tenors",
            "1,2,3",
            "--rates",
            "1.0,1.5,2.0",
            "--ufr",
            "4.0",
            "--alpha",
            "0.15",
            "--targets",
            "1,2,3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0000"))
        .stdout(predicate::str::contains("1.5000"))
        .stdout(predicate::str::contains("2.0000"));
}

#[test]
fn test_extrapolate_rejects_duplicate_tenors() {
    rfr()
        .args([
            "extrapolate",
            "--tenors",
            "1,2,2",
            "--rates",
            "1.0,1.5,2.0",
            "--ufr",
            "4.0",
            "--alpha",
            "0.15",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate tenor"));
}

#[test]
fn test_extrapolate_requires_alpha_or_calibration() {
    rfr()
        .args([
            "extrapolate",
            "--tenors",
            "1,2,3",
            "--rates",
            "1.0,1.5,2.0",
            "--ufr",
            "4.0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--alpha or --calibrate-alpha"));
}

#[test]
fn test_calibrate_from_csv_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "maturity,rate").unwrap();
    for (tenor, rate) in [(1, 1.2), (2, 1.4), (3, 1.7), (5, 1.9), (10, 2.0)] {
        writeln!(file, "{tenor},{rate}").unwrap();
    }

    rfr()
        .args(["calibrate", "--ufr", "3.6"])
        .arg("--input")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("Convergence Gap"));
}

#[test]
fn test_extrapolate_json_output() {
    rfr()
        .args([
            "extrapolate",
            "--format",
            "json",
            "--tenors",
            "1,2,3",
            "--rates",
            "1.0,1.5,2.0",
            "--ufr",
            "4.0",
            "--alpha",
            "0.15",
            "--targets",
            "10,50",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("zero_rate_pct"));
}
