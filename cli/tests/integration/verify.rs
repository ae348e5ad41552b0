//! End-to-end tests for the vcp binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_copy_and_verify_identical() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("test.txt"), "hello world").unwrap();

    let mut cmd = cargo_bin_cmd!("vcp");
    cmd.arg(src.path().join("test.txt"))
        .arg(dst.path().join("test.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("File copied successfully."))
        .stdout(predicate::str::contains(
            "The contents of the source and destination files are identical.",
        ));

    assert_eq!(
        fs::read_to_string(dst.path().join("test.txt")).unwrap(),
        "hello world"
    );
}

#[rstest]
#[case::empty(&b""[..])]
#[case::ascii(&b"some file content"[..])]
#[case::binary(&[0u8, 1, 2, 253, 254, 255, 0, 10][..])]
fn test_round_trip_reports_identical(#[case] content: &[u8]) {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("data"), content).unwrap();

    let mut cmd = cargo_bin_cmd!("vcp");
    cmd.arg(src.path().join("data"))
        .arg(dst.path().join("data"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The contents of the source and destination files are identical.",
        ));
}

#[test]
fn test_round_trip_large_file() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    // Several hash chunks worth of data
    let content: Vec<u8> = (0..=255).cycle().take(300 * 1024).collect();
    fs::write(src.path().join("big.bin"), &content).unwrap();

    let mut cmd = cargo_bin_cmd!("vcp");
    cmd.arg(src.path().join("big.bin"))
        .arg(dst.path().join("big.bin"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The contents of the source and destination files are identical.",
        ));

    assert_eq!(fs::read(dst.path().join("big.bin")).unwrap(), content);
}

#[test]
fn test_source_not_found_skips_verification() {
    let dst = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("vcp");
    cmd.arg("/nonexistent/path/file.txt")
        .arg(dst.path().join("file.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to copy"))
        .stdout(predicate::str::contains("identical").not())
        .stdout(predicate::str::contains("different").not());

    assert!(!dst.path().join("file.txt").exists());
}

#[rstest]
#[case::no_args(&[][..])]
#[case::one_arg(&["only.txt"][..])]
#[case::three_args(&["a.txt", "b.txt", "c.txt"][..])]
fn test_wrong_argument_count_is_usage_error(#[case] args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("vcp");
    cmd.args(args)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_exits_zero() {
    let mut cmd = cargo_bin_cmd!("vcp");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
