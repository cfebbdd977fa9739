use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn missing_alignment_file_exits_with_code_1() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("reads.fa");
    std::fs::write(&input, ">r\nACGT\n").unwrap();
    let output = dir.path().join("kept.fa");

    Command::cargo_bin("telotools")
        .unwrap()
        .args([
            "extract",
            "-b",
            "/no/such/sample.bam",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn unknown_read_type_is_rejected_at_parse_time() {
    Command::cargo_bin("telotools")
        .unwrap()
        .args([
            "extract",
            "-b",
            "sample.bam",
            "-i",
            "reads.fa",
            "-o",
            "kept.fa",
            "--readtype",
            "SUBREAD",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn help_lists_the_extract_command() {
    Command::cargo_bin("telotools")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"));
}
