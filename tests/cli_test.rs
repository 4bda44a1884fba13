//! Integration tests for the parsed-text CLI binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("parsed-text").expect("binary exists")
}

#[test]
fn test_no_patterns_fails_with_hint() {
    cmd()
        .arg("some text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No patterns specified"));
}

#[test]
fn test_literal_marking() {
    cmd()
        .args(["--literal", "bar", "foo bar baz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("match[literal] @4 \"bar\""))
        .stdout(predicate::str::contains("\"foo \""))
        .stdout(predicate::str::contains("\" baz\""));
}

#[test]
fn test_url_marking() {
    cmd()
        .args(["--url", "docs live at https://example.com/start now"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "match[url] @13 \"https://example.com/start\"",
        ));
}

#[test]
fn test_regex_pattern_marking() {
    cmd()
        .args(["--pattern", r"[0-9]+", "order 42 shipped"])
        .assert()
        .success()
        .stdout(predicate::str::contains("match[regex] @6 \"42\""));
}

#[test]
fn test_invalid_regex_is_reported() {
    cmd()
        .args(["--pattern", "(", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --pattern '('"));
}

#[test]
fn test_reads_stdin_when_no_argument() {
    cmd()
        .args(["--email"])
        .write_stdin("mail a@b.co now")
        .assert()
        .success()
        .stdout(predicate::str::contains("match[email] @5 \"a@b.co\""));
}

#[test]
fn test_verbose_prints_counts() {
    cmd()
        .args(["--verbose", "--literal", "bar", "foo bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rules:    1"))
        .stdout(predicate::str::contains("Segments: 2"));
}
