//! CLI integration tests for the artlint binary
//!
//! These tests run the compiled binary against temporary article
//! directories.

mod common;

use assert_cmd::Command;
use common::{complete_article, write_article, write_cover};
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command instance for the artlint binary
#[allow(deprecated)]
fn artlint_cmd() -> Command {
    let mut cmd = Command::cargo_bin("artlint").expect("Failed to find artlint binary");
    cmd.env_remove("ARTLINT_LOG").env("NO_COLOR", "1");
    cmd
}

fn complete_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_cover(temp.path());
    write_article(temp.path(), "01-cache.md", &complete_article());
    temp
}

fn weak_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_article(temp.path(), "01-rascunho.md", "# Rascunho\n\nAlgumas notas.\n");
    temp
}

// ============================================================================
// --help / --version
// ============================================================================

#[test]
fn test_help_lists_subcommands() {
    artlint_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("content-quality linter"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("sections"));
}

#[test]
fn test_version_flag() {
    artlint_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_check_help_shows_options() {
    artlint_cmd()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--min-score"))
        .stdout(predicate::str::contains("--locale"));
}

// ============================================================================
// check command
// ============================================================================

#[test]
fn test_check_text_output() {
    let temp = complete_dir();
    artlint_cmd()
        .arg("check")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Article 01: Cache distribuído na prática"))
        .stdout(predicate::str::contains("Final: 100.0"))
        .stdout(predicate::str::contains("Average final score: 100.0 across 1 article(s)"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_check_json_output() {
    let temp = complete_dir();
    let output = artlint_cmd()
        .args(["check", "--format", "json"])
        .arg(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["reports"][0]["final_score"].as_f64(), Some(100.0));
    assert_eq!(parsed["reports"][0]["number"].as_u64(), Some(1));
    assert_eq!(parsed["average_score"].as_f64(), Some(100.0));
    assert!(parsed["metadata"]["timestamp"].is_string());
}

#[test]
fn test_check_markdown_to_file() {
    let temp = complete_dir();
    let out_dir = TempDir::new().unwrap();
    let out_file = out_dir.path().join("report.md");

    artlint_cmd()
        .args(["check", "-f", "markdown", "-o"])
        .arg(&out_file)
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Report written to"));

    let content = std::fs::read_to_string(&out_file).unwrap();
    assert!(content.starts_with("# Article Quality Report"));
    assert!(content.contains("| 1 | 01-cache.md |"));
}

#[test]
fn test_check_json_to_file() {
    let temp = complete_dir();
    let out_dir = TempDir::new().unwrap();
    let out_file = out_dir.path().join("report.json");

    artlint_cmd()
        .args(["check", "-f", "json", "-o"])
        .arg(&out_file)
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&out_file).unwrap();
    assert!(content.ends_with("}\n"));
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["reports"][0]["final_score"].as_f64(), Some(100.0));
}

#[test]
fn test_check_output_to_missing_directory_fails() {
    let temp = complete_dir();
    artlint_cmd()
        .args(["check", "-f", "json", "-o"])
        .arg(temp.path().join("nope").join("report.json"))
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_check_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    artlint_cmd()
        .arg("check")
        .arg(temp.path().join("nao-existe"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn test_check_file_instead_of_directory_fails() {
    let temp = complete_dir();
    artlint_cmd()
        .arg("check")
        .arg(temp.path().join("01-cache.md"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_check_empty_directory_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    artlint_cmd()
        .arg("check")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No Markdown documents found"));
}

#[test]
fn test_min_score_gate_fails_with_code_two() {
    let temp = weak_dir();
    artlint_cmd()
        .args(["check", "--min-score", "50"])
        .arg(temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Quality gate failed: 1 article(s) below 50.0"));
}

#[test]
fn test_min_score_gate_passes() {
    let temp = complete_dir();
    artlint_cmd()
        .args(["check", "--min-score", "90"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Quality gate passed"));
}

#[test]
fn test_min_score_out_of_range_is_rejected() {
    let temp = complete_dir();
    artlint_cmd()
        .args(["check", "--min-score", "150"])
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--min-score"));
}

#[test]
fn test_gate_from_environment() {
    let temp = weak_dir();
    artlint_cmd()
        .env("ARTLINT__GATE__MIN_SCORE", "99")
        .arg("check")
        .arg(temp.path())
        .assert()
        .code(2);
}

#[test]
fn test_locale_flag_switches_cues() {
    let temp = TempDir::new().unwrap();
    write_article(
        temp.path(),
        "01-post.md",
        "# Post\n\nYesterday the cache broke.\n\n## Notes\n\nbody\n\nPlease share this.\n",
    );

    let pt = artlint_cmd()
        .args(["check", "-f", "json"])
        .arg(temp.path())
        .output()
        .unwrap();
    let pt: serde_json::Value = serde_json::from_slice(&pt.stdout).unwrap();
    assert!(pt["reports"][0]["engagement"]["hook"].is_null());

    let en = artlint_cmd()
        .args(["check", "-f", "json", "--locale", "en"])
        .arg(temp.path())
        .output()
        .unwrap();
    let en: serde_json::Value = serde_json::from_slice(&en.stdout).unwrap();
    assert_eq!(
        en["reports"][0]["engagement"]["hook"].as_str(),
        Some("narrative_opener")
    );
    assert_eq!(en["reports"][0]["engagement"]["cta"].as_str(), Some("invitation"));
}

// ============================================================================
// configuration
// ============================================================================

#[test]
fn test_missing_config_file_fails() {
    let temp = complete_dir();
    artlint_cmd()
        .args(["--config", "/nonexistent/artlint.toml", "check"])
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_invalid_config_value_fails() {
    let temp = complete_dir();
    let config = temp.path().join("custom.toml");
    std::fs::write(
        &config,
        "[[sections]]\nprefix = \"## A\"\nmin_words = 0\n",
    )
    .unwrap();

    artlint_cmd()
        .arg("check")
        .arg(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("min_words"));
}

// ============================================================================
// sections command
// ============================================================================

#[test]
fn test_sections_lists_default_catalog() {
    let temp = TempDir::new().unwrap();
    artlint_cmd()
        .arg("sections")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("## 1. Contexto e Propósito"))
        .stdout(predicate::str::contains("## 7. Reflexões Pessoais & Próximos Passos"))
        .stdout(predicate::str::contains("(min 300 words)"));
}

#[test]
fn test_sections_uses_directory_configuration() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("artlint.toml"),
        "[[sections]]\nprefix = \"## Resumo\"\nmin_words = 40\n",
    )
    .unwrap();

    artlint_cmd()
        .arg("sections")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("## Resumo  (min 40 words)"))
        .stdout(predicate::str::contains("Contexto").not());
}
