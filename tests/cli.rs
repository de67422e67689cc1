//! End-to-end tests for the `chatmark` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn chatmark() -> Command {
    Command::from(cargo_bin_cmd!("chatmark"))
}

#[test]
fn renders_stdin_as_html() {
    chatmark()
        .write_stdin("Hello **there**\n* one\n* two\n")
        .assert()
        .success()
        .stdout(
            "<p class=\"chat-paragraph\">Hello <strong>there</strong></p>\n\
             <ul class=\"chat-list\">\n<li>one</li>\n<li>two</li>\n</ul>\n",
        );
}

#[test]
fn json_output() {
    chatmark()
        .args(["--format", "json"])
        .write_stdin("[x](http://x.com)")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"link\""))
        .stdout(predicate::str::contains("\"url\": \"http://x.com\""));
}

#[test]
fn list_mode_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("chatmark.toml");
    std::fs::write(&config_path, "[lists]\nmode = \"indentation\"\n").unwrap();

    chatmark()
        .arg("--config")
        .arg(&config_path)
        .args(["--list-mode", "marker-sensitive"])
        .write_stdin("1. a\n2. b")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<ol"));
}

#[test]
fn reads_file_and_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("reply.txt");
    let output = dir.path().join("reply.typ");
    std::fs::write(&input, "- a\n  - b").unwrap();

    chatmark()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--format", "typst"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "#block(breakable: false)[\n- a\n  - b\n]\n\n"
    );
}

#[test]
fn renders_transcript() {
    chatmark()
        .arg("--transcript")
        .write_stdin(
            r#"[{"role": "system", "content": "hidden"},
                {"role": "user", "content": "list please"},
                {"role": "assistant", "content": "* done"}]"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("message-user"))
        .stdout(predicate::str::contains("<li>done</li>"))
        .stdout(predicate::str::contains("hidden").not());
}

#[test]
fn bad_transcript_fails() {
    chatmark()
        .arg("--transcript")
        .write_stdin("not json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: invalid transcript"));
}

#[test]
fn bad_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("broken.toml");
    std::fs::write(&config_path, "[lists\n").unwrap();

    chatmark()
        .arg("--config")
        .arg(&config_path)
        .write_stdin("hi")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn missing_input_file_fails() {
    chatmark()
        .arg("/nonexistent/reply.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read /nonexistent/reply.txt"));
}
