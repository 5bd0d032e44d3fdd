use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lingo() -> Command {
    let mut cmd = Command::cargo_bin("lingo").unwrap();
    for var in ["LINGO_SEGMENTER", "LINGO_LINE_WIDTH", "LINGO_THAI_CMD", "LINGO_THAI_DICT"] {
        cmd.env_remove(var);
    }
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn segment_prints_one_span_per_line() {
    lingo()
        .args(["segment", "--lang", "en", "--backend", "naive"])
        .write_stdin("Hi, you")
        .assert()
        .success()
        .stdout("0\t2\tword\tHi\n2\t3\tother\t,\n3\t4\tother\t \n4\t7\tword\tyou\n");
}

#[test]
fn segment_json() {
    lingo()
        .args(["segment", "--lang", "el", "--backend", "naive", "--json"])
        .write_stdin("γεια")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"γεια\""))
        .stdout(predicate::str::contains("\"is_wordlike\": true"));
}

#[test]
fn segment_accepts_invalid_utf8() {
    lingo()
        .args(["segment", "--lang", "en", "--backend", "naive"])
        .write_stdin(&b"ok\xFFgo"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{FFFD}"));
}

#[test]
fn unknown_backend_is_rejected() {
    lingo()
        .args(["segment", "--lang", "en", "--backend", "spacy"])
        .write_stdin("text")
        .assert()
        .failure();
}

#[test]
fn annotate_links_known_words() {
    let dir = TempDir::new().unwrap();
    let wordforms = dir.path().join("wordforms.json");
    fs::write(
        &wordforms,
        r#"[{"surface_form": "hund", "lemma": "hund", "translations": ["dog"]}]"#,
    )
    .unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "Der Hund und der hund.\n\nEnde").unwrap();

    lingo()
        .args(["annotate", "--lang", "de", "--wordforms"])
        .arg(&wordforms)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<p>Der <a class=\"word-link\""))
        .stdout(predicate::str::contains("data-translations=\"dog\">Hund</a>"))
        .stdout(predicate::str::contains("</p>\n\n<p>Ende</p>"));

    lingo()
        .args(["annotate", "--lang", "de", "--plain", "--wordforms"])
        .arg(&wordforms)
        .arg(&input)
        .assert()
        .success()
        .stdout("Der Hund und der hund.\n\nEnde\n");

    lingo()
        .args(["annotate", "--lang", "de", "--json", "--wordforms"])
        .arg(&wordforms)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found_wordforms\": [\n    \"hund\"\n  ]"));
}

#[test]
fn annotate_requires_wordforms_file() {
    lingo()
        .args(["annotate", "--lang", "de", "--wordforms", "/no/such/file.json"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read wordforms"));
}

#[test]
fn backends_reports_availability() {
    lingo()
        .args(["backends", "--lang", "el"])
        .assert()
        .success()
        .stdout(predicate::str::contains("naive\tavailable"))
        .stdout(predicate::str::contains("el\t"));
}

#[test]
fn missing_config_file_fails() {
    lingo()
        .args(["--config", "/no/such/lingo.json", "backends"])
        .assert()
        .failure();
}
