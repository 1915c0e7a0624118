use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup(html: &str, dictionary_words: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let entries: serde_json::Map<String, serde_json::Value> = dictionary_words
        .iter()
        .map(|w| (w.to_string(), serde_json::Value::from(1)))
        .collect();
    fs::write(
        dir.path().join("dictionary.json"),
        serde_json::Value::Object(entries).to_string(),
    )
    .unwrap();
    fs::write(dir.path().join("custom.txt"), "").unwrap();
    fs::write(dir.path().join("page.html"), html).unwrap();
    dir
}

fn htmlspell(dir: &TempDir, extra_args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("htmlspell").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("HTMLSPELL_APP_ID")
        .env_remove("HTMLSPELL_APP_KEY")
        .env_remove("HTMLSPELL_LOOKUP_URL")
        .env_remove("HTMLSPELL_EDITOR")
        .env_remove("EDITOR")
        .arg("--no-color")
        .arg("page.html")
        .arg("dictionary.json")
        .arg("custom.txt");
    cmd.args(extra_args);
    cmd
}

fn custom_dict(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("custom.txt")).unwrap()
}

#[test]
fn missing_input_file_exits_one() {
    let dir = setup("<p>hi</p>", &[]);
    fs::remove_file(dir.path().join("page.html")).unwrap();

    htmlspell(&dir, &[])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a file"));
}

#[test]
fn missing_positional_args_exit_one() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("htmlspell")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .code(1);
}

#[test]
fn clean_file_exits_zero() {
    let dir = setup("<p>we get mail</p>", &["we", "get", "mail"]);

    htmlspell(&dir, &["-e"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No unresolved spelling errors"));
}

#[test]
fn add_writes_to_custom_dictionary() {
    let dir = setup("<p>we recieve mail</p>", &["we", "mail"]);

    htmlspell(&dir, &[])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("recieve"))
        .stdout(predicate::str::contains("added to the custom dictionary"));

    assert!(custom_dict(&dir).contains("recieve"));
}

#[test]
fn skip_with_exit_error_exits_two() {
    let dir = setup("<p>we recieve mail</p>", &["we", "mail"]);

    htmlspell(&dir, &["-e"]).write_stdin("2\n").assert().code(2);
    assert_eq!(custom_dict(&dir), "");
}

#[test]
fn skip_without_exit_error_exits_zero() {
    let dir = setup("<p>we recieve mail</p>", &["we", "mail"]);

    htmlspell(&dir, &[]).write_stdin("s\n").assert().success();
}

#[test]
fn close_exits_zero_without_persisting() {
    let dir = setup(
        "<p>we recieve mail</p>\n<p>glorp</p>",
        &["we", "mail"],
    );

    // Add the first word, close on the second; the add is abandoned.
    htmlspell(&dir, &["-e"])
        .write_stdin("1\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Closed without saving"));
    assert_eq!(custom_dict(&dir), "");
}

#[test]
fn code_region_is_never_checked() {
    let dir = setup(
        "<p>prose here</p>\n<code>\npublik class Foo\n</code>",
        &["prose", "here"],
    );

    // No prompt: stdin is empty and the run still completes cleanly.
    htmlspell(&dir, &["-e"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No unresolved spelling errors"));
}

#[test]
fn placeholder_is_never_checked() {
    let dir = setup("<p>{% glorp snorp %}</p>", &[]);

    htmlspell(&dir, &["-e"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No unresolved spelling errors"));
}

#[test]
fn capitalized_word_skipped_unless_strict() {
    let dir = setup("<p>we Recieve mail</p>", &["we", "mail"]);

    htmlspell(&dir, &["-e"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No unresolved spelling errors"));

    htmlspell(&dir, &["-e", "-s"])
        .write_stdin("2\n")
        .assert()
        .code(2);
}

#[test]
fn eof_on_prompt_closes_neutrally() {
    let dir = setup("<p>glorp</p>", &[]);

    htmlspell(&dir, &["-e"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Closed without saving"));
}
