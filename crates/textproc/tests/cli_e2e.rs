//! E2E tests for the `textproc` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn textproc_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_textproc"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("stdout should be JSON")
}

#[test]
fn words_json_from_text_flag() {
    let v = json_stdout(textproc_cmd().args([
        "words",
        "--text",
        "Hello HELLO hello world",
        "--format",
        "json",
    ]));
    assert_eq!(v["word_count"]["hello"], 3);
    assert_eq!(v["total_words"], 4);
    assert_eq!(v["unique_words"], 2);
}

#[test]
fn words_markdown_table() {
    textproc_cmd()
        .args(["words", "-t", "b a b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Word counts"))
        .stdout(predicate::str::contains("|b|2|"))
        .stdout(predicate::str::contains("Total words: 3. Unique words: 2."));
}

#[test]
fn emails_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mail.txt");
    std::fs::write(&path, "ping a@example.com or @invalid.com or b.c@sub.example.org\n").unwrap();
    let v = json_stdout(
        textproc_cmd()
            .arg("emails")
            .arg(&path)
            .args(["--format", "json"]),
    );
    assert_eq!(
        v["emails"],
        serde_json::json!(["a@example.com", "b.c@sub.example.org"])
    );
    assert_eq!(v["email_count"], 2);
}

#[test]
fn clean_from_stdin_prints_text() {
    textproc_cmd()
        .arg("clean")
        .write_stdin("Hi @#$%^&*() there, ok?")
        .assert()
        .success()
        .stdout("Hi  there, ok?");
}

#[test]
fn sentiment_json_positive() {
    let v = json_stdout(textproc_cmd().args([
        "sentiment",
        "--format",
        "json",
        "--text",
        "Extremely fantastic! I very love it!",
    ]));
    assert_eq!(v["label"], "positive");
    assert_eq!(v["language"], "en");
    assert!(v["confidence"].as_f64().unwrap() > 0.5);
}

#[test]
fn sentiment_markdown_chinese() {
    textproc_cmd()
        .args(["sentiment", "-t", "垃圾!太糟糕了!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Sentiment"))
        .stdout(predicate::str::contains("|Label|negative|"))
        .stdout(predicate::str::contains("|Language|zh|"));
}

#[test]
fn sentiment_too_long_fails() {
    textproc_cmd()
        .args(["sentiment", "--max-chars", "5", "-t", "much longer than five"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input_too_long"));
}

#[test]
fn batch_one_document_per_line() {
    let v = json_stdout(
        textproc_cmd()
            .args(["batch", "--format", "json"])
            .write_stdin("很好！超级完美！\nThis is terrible.\n卓越! Perfect!\n"),
    );
    assert_eq!(v["count"], 3);
    assert_eq!(v["results"][0]["label"], "positive");
    assert_eq!(v["results"][1]["label"], "negative");
    assert_eq!(v["results"][2]["language"], "mixed");
}

#[test]
fn batch_failure_names_line_index() {
    textproc_cmd()
        .args(["batch", "--max-chars", "4"])
        .write_stdin("good\nway too long\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("index 1"));
}

#[test]
fn explicit_config_file_applies() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[lexicon]\npositive = [\"stellar\"]\n").unwrap();
    let v = json_stdout(
        textproc_cmd()
            .arg("--config")
            .arg(&config)
            .args(["sentiment", "--format", "json", "-t", "A stellar release"]),
    );
    assert_eq!(v["positive_words"], serde_json::json!(["stellar"]));
}

#[test]
fn default_config_file_is_discovered() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("textproc.toml"),
        "[sentiment]\nmax_input_chars = 3\n",
    )
    .unwrap();
    textproc_cmd()
        .current_dir(dir.path())
        .args(["sentiment", "-t", "good good"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Text too long"));
}

#[test]
fn flags_override_config_file() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("textproc.toml"),
        "[sentiment]\nmax_input_chars = 3\n",
    )
    .unwrap();
    textproc_cmd()
        .current_dir(dir.path())
        .args(["sentiment", "--max-chars", "100", "-t", "good good"])
        .assert()
        .success();
}

#[test]
fn invalid_config_file_fails_with_context() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[sentiment]\nnegation_window = 99\n").unwrap();
    textproc_cmd()
        .arg("--config")
        .arg(&config)
        .args(["words", "-t", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"))
        .stderr(predicate::str::contains("negation_window"));
}

#[test]
fn missing_input_file_fails() {
    textproc_cmd()
        .args(["words", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn version_json() {
    let v = json_stdout(textproc_cmd().args(["version", "--format", "json"]));
    assert_eq!(v["name"], "textproc");
    assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
    assert!(v["schema_version"].is_number());
}

#[test]
fn version_ignores_broken_config_file() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("textproc.toml"), "[sentiment\nnot toml").unwrap();
    textproc_cmd()
        .current_dir(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("textproc"));
    textproc_cmd()
        .current_dir(dir.path())
        .args(["words", "-t", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}

#[test]
fn invalid_format_fails() {
    textproc_cmd()
        .args(["words", "--format", "xml", "-t", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'xml'"));
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let v = json_stdout(textproc_cmd().args(["-vv", "words", "--format", "json", "-t", "hi"]));
    assert_eq!(v["total_words"], 1);
}
