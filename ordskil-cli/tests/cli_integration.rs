//! Integration tests for the `tokenize` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tokenize() -> Command {
    Command::cargo_bin("tokenize").unwrap()
}

#[test]
fn stdin_to_stdout_text_mode() {
    tokenize()
        .write_stdin("Hann kom heim. Svo fór hann.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hann kom heim .\n"))
        .stdout(predicate::str::contains("Svo fór hann .\n"));
}

#[test]
fn file_to_file() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("in.txt");
    let outfile = dir.path().join("out.txt");
    fs::write(&infile, "Ég á 10.000 kr. í vasanum.\n").unwrap();

    tokenize().arg(&infile).arg(&outfile).assert().success();

    let content = fs::read_to_string(&outfile).unwrap();
    assert!(content.contains("10.000 kr."), "got: {content}");
}

#[test]
fn csv_output() {
    tokenize()
        .arg("--csv")
        .write_stdin("Hann kom kl. 15:30.")
        .assert()
        .success()
        .stdout(predicate::str::contains("2,\"kl. 15:30\",\"15|30|0\""))
        .stdout(predicate::str::contains("0,\"\",\"\",\"\",\"\""));
}

#[test]
fn json_output() {
    tokenize()
        .arg("--json")
        .write_stdin("Hann kom.")
        .assert()
        .success()
        .stdout(predicate::str::contains("{\"k\":\"BEGIN SENT\"}"))
        .stdout(predicate::str::contains("\"t\":\"Hann\""))
        .stdout(predicate::str::contains("{\"k\":\"END SENT\"}"));
}

#[test]
fn csv_and_json_are_mutually_exclusive() {
    tokenize()
        .arg("--csv")
        .arg("--json")
        .write_stdin("texti")
        .assert()
        .failure();
}

#[test]
fn empty_lines_split_sentences() {
    tokenize()
        .write_stdin("fyrri hluti\n\nseinni hluti\n")
        .assert()
        .success()
        .stdout(predicate::eq("fyrri hluti\nseinni hluti\n"));
}

#[test]
fn one_sentence_per_line_mode() {
    tokenize()
        .arg("-s")
        .write_stdin("ein setning\nönnur setning\n")
        .assert()
        .success()
        .stdout(predicate::eq("ein setning\nönnur setning\n"));
}

#[test]
fn normalize_flag_uses_punctuation_forms() {
    tokenize()
        .arg("-n")
        .write_stdin("Hann las \"bók\" í gær.")
        .assert()
        .success()
        .stdout(predicate::str::contains("„ bók “"));
}

#[test]
fn original_flag_reproduces_input() {
    tokenize()
        .arg("-o")
        .write_stdin("Hann   las  bók.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hann   las  bók."));
}

#[test]
fn convert_numbers_flag() {
    tokenize()
        .arg("-c")
        .write_stdin("Hann fékk $1,234.56 í gær.")
        .assert()
        .success()
        .stdout(predicate::str::contains("$1.234,56"));
}

#[test]
fn missing_input_file_fails() {
    tokenize()
        .arg("engin-slik-skra.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("engin-slik-skra.txt"));
}

#[test]
fn kludgy_ordinal_modes() {
    tokenize()
        .arg("-k")
        .arg("1")
        .write_stdin("Farðu í 1sta sinn.")
        .assert()
        .success()
        .stdout(predicate::str::contains("fyrsta"));

    tokenize()
        .arg("-k")
        .arg("9")
        .write_stdin("texti")
        .assert()
        .failure();
}
