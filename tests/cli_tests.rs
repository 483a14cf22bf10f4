mod common;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{self, contains};

fn tabular_source() -> Command {
    let mut cmd = Command::cargo_bin("tabular-source").unwrap();
    cmd.env_remove("TABULAR_SOURCE_HOLD_STREAM");
    cmd
}

#[test]
fn version() {
    let assert = tabular_source().arg("-V").assert();
    assert.success().stdout(str::starts_with("tabular-source "));
}

#[test]
fn help() {
    let assert = tabular_source().arg("-h").assert();
    assert.success().stdout(contains("\nUsage"));
}

#[test]
fn unknown_flag_is_usage_error() {
    let assert = tabular_source().arg("--bogus").assert();
    assert.code(64);
}

#[test]
fn copies_stdin() {
    let assert = tabular_source().write_stdin("id,name\n1,ada\n").assert();
    assert.success().stdout("id,name\n1,ada\n");
}

#[test]
fn verbose_with_stdin() {
    let assert = tabular_source().write_stdin("narrow").arg("-v").assert();
    assert
        .success()
        .stderr("source -\nformat matrix\npipe true\nfifo true\nfile false\nblocking true\ndetect-truncation false\nlast-known-size none\nstream-mode false\nhold-stream default\nstate classified\n")
        .stdout("narrow");
}

#[test]
fn stream_stdin_until_end() {
    let assert = tabular_source()
        .write_stdin("a\tb\n")
        .args(["--stream", "-v"])
        .assert();
    assert
        .success()
        .stderr(contains("blocking false\n").and(contains("stream-mode true\n")))
        .stdout("a\tb\n");
}

#[test]
fn hold_stream_does_not_reopen_stdin() {
    let assert = tabular_source()
        .write_stdin("x\n")
        .args(["--hold-stream", "reopen", "-v"])
        .assert();
    assert
        .success()
        .stderr(contains("hold-stream reopen\n"))
        .stdout("x\n");
}

#[test]
fn hold_stream_from_env() {
    let assert = tabular_source()
        .env("TABULAR_SOURCE_HOLD_STREAM", "never")
        .write_stdin("x\n")
        .arg("-v")
        .assert();
    assert.success().stderr(contains("hold-stream never\n"));
}

#[test]
fn copies_file() {
    let file = common::temp_file_with(".csv", b"1,2\n");
    let assert = tabular_source().arg(file.path()).assert();
    assert.success().stdout("1,2\n");
}

#[test]
fn verbose_json_for_file() {
    let file = common::temp_file_with(".TSV", b"1\t2\n");
    let assert = tabular_source()
        .arg(file.path())
        .args(["-v", "--format=json"])
        .assert();
    assert
        .success()
        .stderr(
            contains(r#""format":"tsv""#)
                .and(contains(r#""isFile":true"#))
                .and(contains(r#""isPipe":false"#))
                .and(contains(r#""lastKnownSize":null"#)),
        )
        .stdout("1\t2\n");
}

#[test]
fn verbose_csv_for_query() {
    let assert = tabular_source()
        .args(["--query", "select 1", "-v", "-f", "csv"])
        .assert();
    assert
        .success()
        .stderr("source,format,pipe,fifo,file,blocking,detect-truncation,last-known-size,stream-mode,hold-stream,state\n<query>,matrix,false,false,false,true,false,none,false,default,classified\n")
        .stdout("");
}

#[test]
fn output_to_file() {
    let dir = tempfile::TempDir::new().expect("create temp dir");
    let out = dir.path().join("out.csv");
    let assert = tabular_source()
        .write_stdin("1,2\n")
        .arg("--output")
        .arg(&out)
        .assert();
    assert.success().stdout("");
    assert_eq!(std::fs::read_to_string(&out).expect("read output"), "1,2\n");
}

#[test]
fn missing_file() {
    let assert = tabular_source().arg("/nonexistent/table.csv").assert();
    assert
        .code(66)
        .stderr(contains("cannot open file \"/nonexistent/table.csv\""))
        .stdout("");
}

#[test]
fn stream_file_without_notification() {
    let file = common::temp_file_with(".csv", b"1,2\n");
    let assert = tabular_source().arg(file.path()).arg("--stream").assert();
    assert
        .code(78)
        .stderr(contains(
            "streaming on file is not available without file notification service",
        ))
        .stdout("");
}

#[test]
fn tilde_without_home() {
    let assert = tabular_source()
        .env_remove("HOME")
        .arg("~/table.csv")
        .assert();
    assert
        .code(78)
        .stderr(contains("HOME directory is not defined"));
}

#[test]
fn tilde_with_home() {
    let dir = tempfile::TempDir::new().expect("create temp dir");
    std::fs::write(dir.path().join("table.csv"), "a,b\n").expect("write test data");
    let assert = tabular_source()
        .env("HOME", dir.path())
        .arg("~/table.csv")
        .arg("-v")
        .assert();
    assert
        .success()
        .stderr(contains("format csv\n").and(contains("file true\n")))
        .stdout("a,b\n");
}

#[test]
fn bare_tilde_sniffs_typed_path_not_home() {
    let dir = tempfile::TempDir::new().expect("create temp dir");
    let home = dir.path().join("home.csv");
    std::fs::write(&home, "a,b\n").expect("write test data");
    let assert = tabular_source().env("HOME", &home).arg("~").arg("-v").assert();
    assert
        .success()
        .stderr(contains("format matrix\n").and(contains("file true\n")))
        .stdout("a,b\n");
}
