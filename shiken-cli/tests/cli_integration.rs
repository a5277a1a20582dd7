//! Integration tests for the shiken CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PAPER_TEXT: &str = "\
1. What is inheritance? [2]
(a) concept one
(b) concept two
2. Explain polymorphism with an example.
";

fn write_paper(dir: &TempDir, name: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, PAPER_TEXT).unwrap();
    path.display().to_string()
}

#[test]
fn test_process_paper_to_json() {
    let dir = TempDir::new().unwrap();
    let paper = write_paper(&dir, "paper.txt");

    let mut cmd = Command::cargo_bin("shiken").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(&paper)
        .arg("--label")
        .arg("Test Paper")
        .arg("-q");

    let output = cmd.assert().success().get_output().stdout.clone();
    let records: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let records = records.as_array().unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["questionText"], "What is inheritance?");
    assert_eq!(records[0]["type"], "mcq");
    assert_eq!(records[0]["marks"], 2);
    assert_eq!(
        records[0]["options"],
        serde_json::json!(["A) concept one", "B) concept two"])
    );
    assert_eq!(records[0]["chapter"], "Mixed");
    assert_eq!(records[0]["source"], "Test Paper");
    assert_eq!(
        records[1]["questionText"],
        "Explain polymorphism with an example."
    );
    assert_eq!(records[1]["type"], "short_answer");
    assert!(records[1]["options"].is_null());
}

#[test]
fn test_text_output() {
    let dir = TempDir::new().unwrap();
    let paper = write_paper(&dir, "paper.txt");

    let mut cmd = Command::cargo_bin("shiken").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(&paper)
        .arg("-f")
        .arg("text")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("What is inheritance?"))
        .stdout(predicate::str::contains("A) concept one"));
}

#[test]
fn test_markdown_output() {
    let dir = TempDir::new().unwrap();
    let paper = write_paper(&dir, "paper.txt");

    let mut cmd = Command::cargo_bin("shiken").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(&paper)
        .arg("--label")
        .arg("Sample Paper")
        .arg("-f")
        .arg("markdown")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("## Sample Paper"))
        .stdout(predicate::str::contains("*Total questions: 2*"));
}

#[test]
fn test_output_to_file() {
    let dir = TempDir::new().unwrap();
    let paper = write_paper(&dir, "paper.txt");
    let output_file = dir.path().join("records.json");

    let mut cmd = Command::cargo_bin("shiken").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(&paper)
        .arg("-o")
        .arg(&output_file)
        .arg("-q");

    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("What is inheritance?"));
}

#[test]
fn test_process_manifest_with_failure_manifest() {
    let dir = TempDir::new().unwrap();
    write_paper(&dir, "good.txt");
    let manifest_path = dir.path().join("corpus.toml");
    fs::write(
        &manifest_path,
        r#"
        [[documents]]
        path = "good.txt"
        kind = "paper"
        label = "Good Paper"

        [[documents]]
        path = "missing.txt"
        kind = "paper"
        label = "Missing Paper"
        "#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("shiken").unwrap();
    cmd.arg("process")
        .arg("--manifest")
        .arg(&manifest_path)
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("What is inheritance?"))
        .stderr(predicate::str::contains("Failed documents:"))
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn test_all_documents_failing_is_an_error() {
    let dir = TempDir::new().unwrap();
    let manifest_path = dir.path().join("corpus.toml");
    fs::write(
        &manifest_path,
        r#"
        [[documents]]
        path = "missing.txt"
        kind = "paper"
        label = "Missing Paper"
        "#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("shiken").unwrap();
    cmd.arg("process")
        .arg("--manifest")
        .arg(&manifest_path)
        .arg("-q");

    cmd.assert().failure();
}

#[test]
fn test_duplicates_across_documents_collapse() {
    let dir = TempDir::new().unwrap();
    write_paper(&dir, "first.txt");
    write_paper(&dir, "second.txt");
    let manifest_path = dir.path().join("corpus.toml");
    fs::write(
        &manifest_path,
        r#"
        [[documents]]
        path = "first.txt"
        kind = "paper"
        label = "First Paper"

        [[documents]]
        path = "second.txt"
        kind = "paper"
        label = "Second Paper"
        "#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("shiken").unwrap();
    cmd.arg("process")
        .arg("--manifest")
        .arg(&manifest_path)
        .arg("-q")
        .arg("--summary");

    let assert = cmd
        .assert()
        .success()
        .stderr(predicate::str::contains("Duplicates dropped: 2"));
    let output = assert.get_output().stdout.clone();
    let records: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records
        .iter()
        .all(|record| record["source"] == "First Paper"));
}

#[test]
fn test_missing_input_is_an_error() {
    let mut cmd = Command::cargo_bin("shiken").unwrap();
    cmd.arg("process").arg("-q");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no input given"));
}

#[test]
fn test_validate_round_trip() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("paper.txt"), PAPER_TEXT).unwrap();
    let manifest_path = dir.path().join("corpus.toml");
    fs::write(
        &manifest_path,
        r#"
        [[documents]]
        path = "paper.txt"
        kind = "paper"
        label = "Paper One"
        "#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("shiken").unwrap();
    cmd.arg("validate").arg("--manifest").arg(&manifest_path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("✓ Manifest is valid!"));
}

#[test]
fn test_validate_rejects_missing_file() {
    let dir = TempDir::new().unwrap();
    let manifest_path = dir.path().join("corpus.toml");
    fs::write(
        &manifest_path,
        r#"
        [[documents]]
        path = "absent.txt"
        kind = "paper"
        label = "Paper One"
        "#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("shiken").unwrap();
    cmd.arg("validate").arg("--manifest").arg(&manifest_path);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("file not found"));
}

#[test]
fn test_generate_config_writes_template() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("corpus.toml");

    let mut cmd = Command::cargo_bin("shiken").unwrap();
    cmd.arg("generate-config").arg("-o").arg(&output_path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Manifest template generated"));

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("[[documents]]"));
    assert!(content.contains("kind = \"chapter-bank\""));
}
