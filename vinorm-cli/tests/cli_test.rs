//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn vinorm() -> Command {
    Command::cargo_bin("vinorm").unwrap()
}

#[test]
fn normalizes_argument_text() {
    vinorm()
        .arg("--quiet")
        .arg("Tôi có 5 con mèo.")
        .assert()
        .success()
        .stdout(predicate::str::contains("tôi có năm con mèo."));
}

#[test]
fn normalizes_stdin() {
    vinorm()
        .arg("--quiet")
        .write_stdin("Trận đấu diễn ra lúc 14:30.")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "trận đấu diễn ra lúc mười bốn giờ ba mươi phút.",
        ));
}

#[test]
fn normalizes_file_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "Xin chào.\nTP.HCM là thành phố lớn.\n").unwrap();

    vinorm()
        .arg("--quiet")
        .arg("--input")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("xin chào."))
        .stdout(predicate::str::contains(
            "Thành phố Hồ Chí Minh là thành phố lớn.",
        ));
}

#[test]
fn json_output_is_an_array() {
    let assert = vinorm()
        .arg("--quiet")
        .arg("--format")
        .arg("json")
        .arg("Tôi có 5 con mèo.")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: Vec<String> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed, vec!["tôi có năm con mèo."]);
}

#[test]
fn missing_input_file_fails() {
    vinorm()
        .arg("--quiet")
        .arg("--input")
        .arg("/nonexistent/input.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
