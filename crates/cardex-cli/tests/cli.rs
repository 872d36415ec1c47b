//! CLI smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_parse_missing_file_fails() {
    Command::cargo_bin("cardex")
        .unwrap()
        .args(["parse", "no-such-statement.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_debug_missing_file_fails() {
    Command::cargo_bin("cardex")
        .unwrap()
        .args(["debug", "no-such-statement.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_parse_rejects_non_pdf_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("statement.pdf");
    std::fs::write(&path, b"plain text, not a pdf").unwrap();

    Command::cargo_bin("cardex")
        .unwrap()
        .args(["parse", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse PDF"));
}
