//! CLI Interface Tests
//!
//! These tests run the jackt binary against the fixtures and check its
//! listings, diagnostics, exit status and configuration handling.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A jackt command isolated from any configuration on the host.
fn jackt(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jackt").expect("binary should be built");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("JACKT_CONFIG")
        .env_remove("JACKT_VERBOSE")
        .env_remove("JACKT_NO_COLOR");
    cmd
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    jackt(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("tokens")));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    jackt(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jackt"));
}

#[test]
fn test_tokens_text() {
    let home = TempDir::new().unwrap();
    jackt(&home)
        .arg("tokens")
        .arg(fixture("Main.jack"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("keyword\tclass\nidentifier\tMain\nsymbol\t{\n"))
        .stdout(predicate::str::contains("stringConstant\tHello, <Jack> & friends\n"))
        .stdout(predicate::str::contains("Prints a greeting").not());
}

#[test]
fn test_tokens_xml() {
    let home = TempDir::new().unwrap();
    jackt(&home)
        .args(["tokens", "--format", "xml"])
        .arg(fixture("Main.jack"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<tokens>\n<keyword> class </keyword>\n"))
        .stdout(predicate::str::contains(
            "<stringConstant> Hello, &lt;Jack&gt; &amp; friends </stringConstant>",
        ))
        .stdout(predicate::str::contains("<symbol> + </symbol>"))
        .stdout(predicate::str::ends_with("</tokens>\n"));
}

#[test]
fn test_tokens_json() {
    let home = TempDir::new().unwrap();
    let output = jackt(&home)
        .args(["tokens", "-F", "json"])
        .arg(fixture("Main.jack"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let tokens: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tokens = tokens.as_array().unwrap();
    assert_eq!(tokens.len(), 40);
    assert_eq!(tokens[0], serde_json::json!({"kind": "keyword", "value": "class"}));
    assert!(tokens.contains(&serde_json::json!({"kind": "integerConstant", "value": 2})));
}

#[test]
fn test_tokens_small_buffer_matches_default() {
    let home = TempDir::new().unwrap();
    let default = jackt(&home)
        .arg("tokens")
        .arg(fixture("Main.jack"))
        .output()
        .unwrap();
    let small = jackt(&home)
        .args(["tokens", "--buffer-size", "1"])
        .arg(fixture("Main.jack"))
        .output()
        .unwrap();
    assert!(small.status.success());
    assert_eq!(small.stdout, default.stdout);
}

#[test]
fn test_check_clean_file() {
    let home = TempDir::new().unwrap();
    jackt(&home)
        .arg("check")
        .arg(fixture("Main.jack"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Main.jack: 40 tokens"));
}

#[test]
fn test_check_reports_diagnostic() {
    let home = TempDir::new().unwrap();
    jackt(&home)
        .arg("check")
        .arg(fixture("Unterminated.jack"))
        .arg(fixture("Main.jack"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Main.jack: 40 tokens"))
        .stderr(predicate::str::contains("error: unterminated string constant"))
        .stderr(predicate::str::contains("Unterminated.jack:3:31"))
        .stderr(predicate::str::contains("3 |         do Output.printString(\"never closed);"))
        .stderr(predicate::str::contains("error: 1 file(s) failed to tokenize"));
}

#[test]
fn test_missing_file() {
    let home = TempDir::new().unwrap();
    jackt(&home)
        .args(["check", "Nope.jack"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read Nope.jack"));
}

#[test]
fn test_config_file_sets_format() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("jackt.toml"), "format = \"xml\"\n").unwrap();

    jackt(&home)
        .arg("tokens")
        .arg(fixture("Main.jack"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<tokens>"));
}

#[test]
fn test_flag_overrides_config_format() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("jackt.toml"), "format = \"xml\"\n").unwrap();

    jackt(&home)
        .args(["tokens", "--format", "text"])
        .arg(fixture("Main.jack"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("keyword\tclass"));
}

#[test]
fn test_explicit_config_path_from_env() {
    let home = TempDir::new().unwrap();
    let config_path = home.path().join("custom.toml");
    std::fs::write(&config_path, "format = \"json\"\n").unwrap();

    jackt(&home)
        .env("JACKT_CONFIG", &config_path)
        .arg("tokens")
        .arg(fixture("Main.jack"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_missing_config_path_fails() {
    let home = TempDir::new().unwrap();
    jackt(&home)
        .args(["--config", "absent.toml", "check"])
        .arg(fixture("Main.jack"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let home = TempDir::new().unwrap();
    jackt(&home)
        .args(["--verbose", "--no-color", "tokens"])
        .arg(fixture("Main.jack"))
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("tokenizing"));
}
