use serde_json::{Value, json};

use crate::common::Fixture;

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn lines_only() {
    let fx = Fixture::new();
    fx.write("a.txt", "1\n2\n3\n");
    fx.wc().args(["-l", "a.txt"]).assert().success().stdout("3 a.txt\n");
}

#[test]
fn words_and_bytes_keep_classic_order() {
    Fixture::new()
        .wc()
        .args(["-c", "-w"])
        .write_stdin("こんにちは 世界\n")
        .assert()
        .success()
        .stdout(" 2 23\n");
}

#[test]
fn json_stdin_is_a_counts_object() {
    let output = Fixture::new()
        .wc()
        .args(["--format", "json"])
        .write_stdin("hello world\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({"lines": 1, "words": 2, "bytes": 12}));
}

#[test]
fn json_batch_reports_failures_inline() {
    let fx = Fixture::new();
    fx.write("a.txt", "hello world\n");
    let output = fx.wc().args(["--format", "json", "a.txt", "missing.txt"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let value = stdout_json(&output);
    assert_eq!(value["inputs"][0], json!({"identifier": "a.txt", "lines": 1, "words": 2, "bytes": 12}));
    assert_eq!(value["inputs"][1]["identifier"], "missing.txt");
    assert_eq!(value["inputs"][1]["error"]["kind"], "unavailable");
    assert_eq!(value["total"], json!({"lines": 1, "words": 2, "bytes": 12}));
}

#[test]
fn lossy_decode_keeps_counting() {
    Fixture::new()
        .wc()
        .args(["--decode", "lossy", "--chunk-size", "4"])
        .write_stdin(&b"ab\xFFcd \xFF\xFE ef\n"[..])
        .assert()
        .success()
        .stdout(" 1  3 12\n");
}
