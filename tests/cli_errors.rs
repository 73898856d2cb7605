#![cfg(feature = "cli")]

use predicates::prelude::*;

#[test]
fn cli_fails_without_any_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("polyteos_rs");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input data"));
}

#[test]
fn cli_computes_density_from_scalar_flags() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("polyteos_rs");
    cmd.args([
        "--equation", "bsq", "--json", "--sa", "30", "--ct", "10", "--p", "1000",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"rho\""))
        .stdout(predicate::str::contains("1027.45"));
}

#[test]
fn cli_computes_specific_volume_by_default() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("polyteos_rs");
    cmd.args(["--sa", "30", "--ct", "10", "--p", "1000"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("specvol"));
}

#[test]
fn cli_reads_state_array_from_stdin() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("polyteos_rs");

    let doc = serde_json::json!([
        { "sa": 30.0, "ct": 10.0, "p": 1000.0 },
        { "sa": 35.0, "ct": 2.0, "p": 4000.0 }
    ])
    .to_string();

    cmd.arg("--json")
        .arg("--equation")
        .arg("stif")
        .arg("--input")
        .arg("-")
        .write_stdin(doc);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"r1\""));
}

#[test]
fn cli_reports_invalid_json_in_file() {
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("bad.json");
    let mut f = File::create(&file_path).unwrap();
    writeln!(f, "this is not json").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("polyteos_rs");
    cmd.arg("--input").arg(file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in input document"));
}
