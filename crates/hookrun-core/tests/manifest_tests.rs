// Rust guideline compliant 2026-02-06

//! Integration tests for manifest loading.

use hookrun_core::{Error, Manifest};
use tempfile::TempDir;

const SAMPLE: &str = r#"
exclude: ^(docs/|vendor/)
repos:
  - repo: https://github.com/pycqa/docformatter
    rev: v1.7.5
    hooks:
      - id: docformatter
        args: [--in-place, --wrap-summaries=88]
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.5.0
    hooks:
      - id: check-shebang-scripts-are-executable
      - id: check-merge-conflict
      - id: check-toml
      - id: end-of-file-fixer
      - id: mixed-line-ending
        args: [--fix=lf]
      - id: requirements-txt-fixer
      - id: trailing-whitespace
  - repo: https://github.com/astral-sh/ruff-pre-commit
    rev: v0.1.6
    hooks:
      - id: ruff
        args: [--fix, --exit-non-zero-on-fix]
      - id: ruff-format
ci:
  autoupdate_schedule: monthly
"#;

#[test]
fn test_load_full_manifest() {
    let manifest = Manifest::from_yaml_str(SAMPLE).expect("Sample manifest should parse");

    assert_eq!(manifest.repos.len(), 3);
    assert_eq!(manifest.hook_count(), 10);
    assert_eq!(manifest.exclude.as_deref(), Some("^(docs/|vendor/)"));
    assert!(!manifest.fail_fast);

    let hooks = &manifest.repos[1].hooks;
    assert_eq!(manifest.repos[1].rev, "v4.5.0");
    assert_eq!(hooks[0].id, "check-shebang-scripts-are-executable");
    assert_eq!(hooks[4].args, vec!["--fix=lf"]);
    assert!(hooks[4].is_fixer());
    assert!(!hooks[2].is_fixer());
}

#[test]
fn test_load_keeps_unknown_hook_keys() {
    let text = r#"
repos:
  - repo: local
    rev: v1
    hooks:
      - id: mypy
        language: system
        types: [python]
"#;
    let manifest = Manifest::from_yaml_str(text).expect("Manifest should parse");
    let hook = &manifest.repos[0].hooks[0];
    assert!(hook.overrides.contains_key("language"));
    assert!(hook.overrides.contains_key("types"));
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(".pre-commit-config.yaml");
    std::fs::write(&path, SAMPLE).expect("Failed to write manifest");

    let manifest = Manifest::load(&path).expect("Manifest should load");
    assert_eq!(manifest.hook_count(), 10);
}

#[test]
fn test_load_missing_file_is_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("missing.yaml");

    match Manifest::load(&path) {
        Err(Error::NotFound(p)) => assert_eq!(p, path),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_load_bad_indentation_is_parse_error() {
    let text = "repos:\n\t- repo: a\n\t  rev: v1\n";
    assert!(matches!(
        Manifest::from_yaml_str(text),
        Err(Error::Parse(_))
    ));
}

#[test]
fn test_load_type_mismatch_is_parse_error() {
    let text = r#"
repos:
  - repo: a
    rev: v1
    hooks: "trailing-whitespace"
"#;
    assert!(matches!(
        Manifest::from_yaml_str(text),
        Err(Error::Parse(_))
    ));
}

#[test]
fn test_parse_error_from_file_mentions_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("broken.yaml");
    std::fs::write(&path, "repos: [").expect("Failed to write manifest");

    let err = Manifest::load(&path).expect_err("Broken manifest should fail");
    assert!(matches!(err, Error::Parse(_)));
    assert!(err.to_string().contains("broken.yaml"));
}
