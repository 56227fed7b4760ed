use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn procure() -> Command {
    Command::cargo_bin("procure").unwrap()
}

#[test]
fn test_process_writes_json_array() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("requests.txt");
    let output = dir.path().join("outputs.json");
    let config = dir.path().join("config.json");

    fs::write(
        &input,
        "need 250 bags of cement for project Skyline in mumbai, urgent\n\n\ndeliver 5 tons of steel to Chennai in 5 days\nriver sand soon\n",
    )
    .unwrap();
    fs::write(&config, r#"{"extraction": {"reference_date": "2024-01-01"}}"#).unwrap();

    procure()
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 records"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0]["material_name"], "cement");
    assert_eq!(records[0]["quantity"], 250);
    assert_eq!(records[0]["unit"], "bags");
    assert_eq!(records[0]["project_name"], "Skyline");
    assert_eq!(records[0]["location"], "Mumbai");
    assert_eq!(records[0]["urgency"], "high");
    assert!(records[0]["deadline"].is_null());

    assert_eq!(records[1]["deadline"], "2024-01-06");
    assert_eq!(records[2]["urgency"], "medium");
    assert!(records[2]["quantity"].is_null());
    assert!(records[2]["unit"].is_null());
}

#[test]
fn test_process_missing_input_fails() {
    let dir = tempdir().unwrap();

    procure()
        .arg("process")
        .arg(dir.path().join("missing.txt"))
        .arg(dir.path().join("out.json"))
        .assert()
        .failure();

    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn test_process_text_format() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("requests.txt");
    let output = dir.path().join("outputs.txt");
    fs::write(&input, "10 kg of cement for bangalore asap\n").unwrap();

    procure()
        .arg("process")
        .arg(&input)
        .arg(&output)
        .args(["--format", "text"])
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("Quantity: 10 kg"));
    assert!(text.contains("Location: Bangalore"));
    assert!(text.contains("Urgency:  high"));
}

#[test]
fn test_batch_writes_one_file_per_input() {
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("out");
    fs::write(dir.path().join("monday.txt"), "50 bags of cement\n").unwrap();
    fs::write(dir.path().join("tuesday.txt"), "3 truckloads of sand\n\nsteel for delhi\n").unwrap();

    let pattern = dir.path().join("*.txt");

    procure()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful"));

    let tuesday: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("tuesday.json")).unwrap()).unwrap();
    assert_eq!(tuesday.as_array().unwrap().len(), 2);
    assert!(out_dir.join("monday.json").exists());
}

#[test]
fn test_batch_no_matches_fails() {
    let dir = tempdir().unwrap();
    let pattern = dir.path().join("*.txt");

    procure()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

/// `procure config ...` with the default config location inside `home`.
fn config_cmd(home: &std::path::Path) -> Command {
    let mut cmd = procure();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .arg("config");
    cmd
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("c.json");

    config_cmd(dir.path())
        .args(["init", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["output"]["pretty"], true);
    assert!(written["extraction"]["reference_date"].is_null());

    config_cmd(dir.path())
        .args(["init", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    config_cmd(dir.path())
        .args(["init", "--force", "--output"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_config_get_default_value() {
    let dir = tempdir().unwrap();

    config_cmd(dir.path())
        .args(["get", "output.pretty"])
        .assert()
        .success()
        .stdout(predicate::str::diff("true\n"));
}

#[test]
fn test_config_get_reads_default_file() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join(".config").join("procure");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        r#"{"extraction": {"reference_date": "2024-01-01"}}"#,
    )
    .unwrap();

    config_cmd(dir.path())
        .args(["get", "extraction.reference_date"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"2024-01-01\""));
}

#[test]
fn test_config_get_unknown_key_fails() {
    let dir = tempdir().unwrap();

    config_cmd(dir.path())
        .args(["get", "output.colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn test_config_path_and_show() {
    let dir = tempdir().unwrap();

    config_cmd(dir.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("procure").and(predicate::str::contains("not created")));

    config_cmd(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pretty\": true"));
}
