use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn extract_writes_json_table() {
    let out = tempfile::tempdir().unwrap();
    let target = out.path().join("summary.json");

    let mut cmd = cargo_bin_cmd!("putusan");
    cmd.arg("extract").arg(fixture_dir()).arg("-o").arg(&target);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Saved 3 documents"));

    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["no"], 1);
    assert_eq!(rows[0]["case_number"], "185/Pid.Sus/2023/PN Yyk");
    assert_eq!(
        rows[0]["evidence_list"],
        "1 paket sabu seberat 0,5 gram; 1 unit handphone merk Samsung"
    );
    assert_eq!(rows[2]["document"], "case_003");
    assert_eq!(rows[2]["case_number"], "Tidak ditemukan");
    assert_eq!(rows[2]["verdict_text"], "Tidak ditemukan");
}

#[test]
fn extract_format_flag_overrides_extension() {
    let out = tempfile::tempdir().unwrap();
    let target = out.path().join("summary.txt");

    let mut cmd = cargo_bin_cmd!("putusan");
    cmd.arg("extract")
        .arg(fixture_dir())
        .args(["--output", target.to_str().unwrap(), "--format", "csv"]);
    cmd.assert().success();

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.starts_with("no,document,case_number,court_name,evidence_list,verdict_text"));
    assert!(written.contains("41/Pid.B/2024/PN Slmn"));
    assert!(written.contains("PN SLEMAN"));
}

#[test]
fn extract_writes_spreadsheet_by_default_extension() {
    let out = tempfile::tempdir().unwrap();
    let target = out.path().join("nested").join("summary.xlsx");

    let mut cmd = cargo_bin_cmd!("putusan");
    cmd.arg("extract").arg(fixture_dir()).arg("-o").arg(&target);
    cmd.assert().success();

    assert!(target.exists());
}

#[test]
fn extract_reads_settings_from_config_file() {
    let out = tempfile::tempdir().unwrap();
    let target = out.path().join("summary.json");
    let config = out.path().join("putusan.toml");
    fs::write(&config, "[output]\nnot_found = \"-\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("putusan");
    cmd.arg("--config")
        .arg(&config)
        .arg("extract")
        .arg(fixture_dir())
        .arg("-o")
        .arg(&target);
    cmd.assert().success();

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("\"case_number\": \"-\""));
    assert!(!written.contains("Tidak ditemukan"));
}

#[test]
fn extract_reads_settings_from_environment() {
    let out = tempfile::tempdir().unwrap();
    let target = out.path().join("summary.json");

    let mut cmd = cargo_bin_cmd!("putusan");
    cmd.env("PUTUSAN_OUTPUT__NOT_FOUND", "kosong")
        .arg("extract")
        .arg(fixture_dir())
        .arg("-o")
        .arg(&target);
    cmd.assert().success();

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("\"verdict_text\": \"kosong\""));
}

#[test]
fn extract_fails_on_missing_directory() {
    let mut cmd = cargo_bin_cmd!("putusan");
    cmd.arg("extract").arg("/definitely/not/a/judgment/dir");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("input directory not found"));
}

#[test]
fn extract_fails_on_empty_directory() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("putusan");
    cmd.arg("extract")
        .arg(input.path())
        .arg("-o")
        .arg(out.path().join("summary.json"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no documents were processed"));
}

#[test]
fn extract_rejects_unknown_format() {
    let out = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("putusan");
    cmd.arg("extract")
        .arg(fixture_dir())
        .args(["-o", out.path().join("summary.ods").to_str().unwrap(), "-f", "ods"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unsupported output format: ods"));
}

#[test]
fn inspect_prints_json_result() {
    let mut cmd = cargo_bin_cmd!("putusan");
    cmd.arg("inspect").arg(fixture_dir().join("case_001.txt"));

    let output_pred = predicate::str::contains("\"case_number\": \"185/Pid.Sus/2023/PN Yyk\"")
        .and(predicate::str::contains("\"court_name\": \"PN YOGYAKARTA\""))
        .and(predicate::str::contains("\"source_name\": \"185_Pid.Sus_2023_PN_Yyk.pdf\""));
    cmd.assert().success().stdout(output_pred);
}

#[test]
fn inspect_prints_yaml_result() {
    let mut cmd = cargo_bin_cmd!("putusan");
    cmd.arg("inspect")
        .arg(fixture_dir().join("case_002.txt"))
        .args(["--format", "yaml"]);

    let output_pred = predicate::str::contains("court_name: PN SLEMAN")
        .and(predicate::str::contains("document_id: case_002"));
    cmd.assert().success().stdout(output_pred);
}

#[test]
fn normalize_strips_boilerplate() {
    let mut cmd = cargo_bin_cmd!("putusan");
    cmd.arg("normalize").arg(fixture_dir().join("case_001.txt"));

    cmd.assert().success().stdout(
        predicate::str::contains("MENGADILI:")
            .and(predicate::str::contains("Direktori Putusan").not())
            .and(predicate::str::contains("Halaman 3 dari 4").not()),
    );
}

#[test]
fn requires_a_subcommand() {
    let mut cmd = cargo_bin_cmd!("putusan");
    cmd.assert().failure();
}
