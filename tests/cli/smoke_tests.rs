use predicates::prelude::*;

use crate::common::Fixture;

#[test]
fn shows_help() {
    Fixture::new()
        .wc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wc").and(predicate::str::contains("--decode")));
}

#[test]
fn counts_stdin_without_arguments() {
    Fixture::new()
        .wc()
        .write_stdin("hello world\n")
        .assert()
        .success()
        .stdout(" 1  2 12\n");
}

#[test]
fn empty_stdin_prints_zeros() {
    Fixture::new().wc().write_stdin("").assert().success().stdout("0 0 0\n");
}

#[test]
fn single_file_has_no_total() {
    let fx = Fixture::new();
    fx.write("a.txt", "one two three four five");
    fx.wc().arg("a.txt").assert().success().stdout(" 0  5 23 a.txt\n");
}

#[test]
fn missing_file_is_reported_and_others_still_counted() {
    let fx = Fixture::new();
    fx.write("a.txt", "hello world\n");
    fx.wc()
        .args(["a.txt", "missing.txt"])
        .assert()
        .code(1)
        .stdout(" 1  2 12 a.txt\n 1  2 12 total\n")
        .stderr(predicate::str::starts_with("wc: missing.txt: "));
}

#[test]
fn rows_follow_argument_order() {
    let fx = Fixture::new();
    fx.write("big.txt", "word ".repeat(50_000));
    fx.write("small.txt", "x\n");
    fx.wc()
        .args(["--jobs", "4", "small.txt", "big.txt", "small.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)^.*small\.txt\n.*big\.txt\n.*small\.txt\n.*total\n$").unwrap());
}

#[test]
fn dash_reads_stdin_inside_a_batch() {
    let fx = Fixture::new();
    fx.write("a.txt", "a b\n");
    fx.wc()
        .args(["a.txt", "-"])
        .write_stdin("c\n")
        .assert()
        .success()
        .stdout("1 2 4 a.txt\n1 1 2 -\n2 3 6 total\n");
}

#[test]
fn directory_is_a_failed_input() {
    let fx = Fixture::new();
    std::fs::create_dir(fx.path("sub")).unwrap();
    fx.wc()
        .arg("sub")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("wc: sub: "));
}

#[test]
fn strict_decode_fails_on_malformed_input() {
    Fixture::new()
        .wc()
        .args(["--decode", "strict"])
        .write_stdin(&b"ab\xFFcd"[..])
        .assert()
        .code(1)
        .stderr("wc: standard input: invalid UTF-8 sequence at byte 2\n");
}

#[test]
fn truncate_decode_is_the_default() {
    Fixture::new().wc().write_stdin(&b"ab cd\xFF ef\n"[..]).assert().success().stdout("0 2 5\n");
}

#[test]
fn invalid_jobs_is_a_usage_error() {
    Fixture::new()
        .wc()
        .args(["--jobs", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--jobs"));
}

#[test]
fn jobs_can_come_from_the_environment() {
    let fx = Fixture::new();
    fx.write("a.txt", "a\n");
    fx.write("b.txt", "b\n");
    fx.wc().env("WC_JOBS", "1").args(["a.txt", "b.txt"]).assert().success().stdout(predicate::str::ends_with(
        "2 2 4 total\n",
    ));
}

#[test]
fn repeated_dash_reads_stdin_once() {
    let input = "é ".repeat(400_000);
    let expected = format!(
        "{:>7} {:>7} {:>7} -\n{:>7} {:>7} {:>7} -\n{:>7} {:>7} {:>7} total\n",
        0, 400_000, 1_200_000, 0, 0, 0, 0, 400_000, 1_200_000
    );
    let fx = Fixture::new();
    for _ in 0..3 {
        fx.wc()
            .args(["--jobs", "2", "--chunk-size", "7", "-", "-"])
            .write_stdin(input.as_bytes())
            .assert()
            .success()
            .stdout(expected.clone());
    }
}

#[test]
fn oversized_chunk_size_is_a_usage_error() {
    Fixture::new()
        .wc()
        .args(["--chunk-size", "100000000m"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--chunk-size").and(predicate::str::contains("at most")));
}
