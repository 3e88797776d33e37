// Rust guideline compliant 2026-02-07

//! Integration tests for the executor and run driver.
//!
//! Hooks are ordinary Unix utilities (`true`, `false`, `sh`, `sleep`) so the
//! tests exercise real subprocesses.

#![cfg(unix)]

use hookrun_core::{plan, validate, CancelToken, Manifest, Plan};
use hookrun_runner::{HookExecutor, Outcome, Runner, Verdict};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for (name, content) in files {
        std::fs::write(temp_dir.path().join(name), content).expect("Failed to write file");
    }
    temp_dir
}

fn build_plan(manifest: &str, files: &[&str]) -> Plan {
    let manifest = Manifest::from_yaml_str(manifest).expect("Manifest should parse");
    validate(&manifest).expect("Manifest should be valid");
    let candidates: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
    plan(&manifest, &candidates).expect("Plan should build")
}

#[test]
fn test_pass_then_fail_reports_every_unit() {
    let dir = workspace(&[("a.toml", "x = 1\n"), ("b.py", "print(1)  \n")]);
    let plan = build_plan(
        r#"
repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v1
    hooks:
      - id: check-toml
        entry: "true"
      - id: trailing-whitespace
        entry: "false"
"#,
        &["a.toml", "b.py"],
    );

    let report = Runner::new(dir.path()).run(&plan, &CancelToken::new());

    assert_eq!(report.summary.verdict, Verdict::Fail);
    assert_eq!(report.summary.total, 2);
    let outcomes: Vec<Outcome> = report.results.iter().map(|r| r.outcome).collect();
    assert_eq!(outcomes, vec![Outcome::Passed, Outcome::Failed]);
    assert_eq!(report.results[0].exit_code, Some(0));
    assert_eq!(report.results[1].exit_code, Some(1));
    assert_eq!(report.summary.exit_code(), 1);
}

#[test]
fn test_all_passing_units_pass() {
    let dir = workspace(&[("a.py", "")]);
    let plan = build_plan(
        r#"
repos:
  - repo: r
    rev: v1
    hooks:
      - id: one
        entry: "true"
      - id: two
        entry: "true"
"#,
        &["a.py"],
    );
    let report = Runner::new(dir.path()).run(&plan, &CancelToken::new());
    assert_eq!(report.summary.verdict, Verdict::Pass);
    assert_eq!(report.summary.passed, 2);
    assert_eq!(report.summary.exit_code(), 0);
}

#[test]
fn test_output_and_file_arguments_are_captured() {
    let dir = workspace(&[("a.py", ""), ("b.py", "")]);
    let plan = build_plan(
        r#"
repos:
  - repo: local
    rev: v1
    hooks:
      - id: echo-files
        entry: sh -c 'echo "args:$*"; echo oops >&2' --
        args: [--check]
"#,
        &["a.py", "b.py"],
    );
    let report = Runner::new(dir.path()).run(&plan, &CancelToken::new());
    let output = &report.results[0].output;
    assert!(output.contains("args:--check a.py b.py"), "got: {}", output);
    assert!(output.contains("oops"), "stderr should be captured, got: {}", output);
}

#[test]
fn test_missing_executable_is_tool_error_and_run_continues() {
    let dir = workspace(&[("a.py", "")]);
    let plan = build_plan(
        r#"
repos:
  - repo: r
    rev: v1
    hooks:
      - id: definitely-not-installed-hookrun-tool
      - id: after
        entry: "true"
"#,
        &["a.py"],
    );
    let report = Runner::new(dir.path()).run(&plan, &CancelToken::new());

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].outcome, Outcome::ToolError);
    assert_eq!(report.results[1].outcome, Outcome::Passed);
    assert_eq!(report.summary.verdict, Verdict::Fail);
    assert_eq!(report.summary.exit_code(), 2);
}

#[test]
fn test_unit_without_files_passes_without_running() {
    let dir = workspace(&[]);
    let plan = build_plan(
        r#"
repos:
  - repo: r
    rev: v1
    hooks:
      - id: check-toml
        entry: "false"
        files: \.toml$
"#,
        &["b.py"],
    );
    let report = Runner::new(dir.path()).run(&plan, &CancelToken::new());
    assert_eq!(report.results[0].outcome, Outcome::Passed);
    assert!(report.results[0].skipped);
    assert_eq!(report.summary.verdict, Verdict::Pass);
}

#[test]
fn test_timeout_is_tool_error() {
    let dir = workspace(&[]);
    let plan = build_plan(
        r#"
repos:
  - repo: r
    rev: v1
    hooks:
      - id: slow
        entry: sleep 5
        pass_filenames: false
        always_run: true
      - id: after
        entry: "true"
        always_run: true
"#,
        &[],
    );
    let report = Runner::new(dir.path())
        .with_timeout(Some(Duration::from_millis(200)))
        .run(&plan, &CancelToken::new());

    assert_eq!(report.results[0].outcome, Outcome::ToolError);
    assert!(report.results[0].output.contains("timed out"));
    assert!(report.results[0].duration < Duration::from_secs(4));
    assert_eq!(report.results[1].outcome, Outcome::Passed);
}

#[test]
fn test_timeout_kills_processes_started_by_the_hook() {
    let dir = workspace(&[]);
    let plan = build_plan(
        r#"
repos:
  - repo: r
    rev: v1
    hooks:
      - id: wrapper
        entry: sh -c 'sh -c "sleep 1; echo late > marker.txt"; true'
        pass_filenames: false
        always_run: true
      - id: after
        entry: "true"
        always_run: true
"#,
        &[],
    );
    let report = Runner::new(dir.path())
        .with_timeout(Some(Duration::from_millis(200)))
        .run(&plan, &CancelToken::new());

    assert_eq!(report.results[0].outcome, Outcome::ToolError);
    assert_eq!(report.results[1].outcome, Outcome::Passed);

    std::thread::sleep(Duration::from_millis(1500));
    assert!(!dir.path().join("marker.txt").exists());
}

#[test]
fn test_cancel_kills_processes_started_by_the_hook() {
    let dir = workspace(&[]);
    let plan = build_plan(
        r#"
repos:
  - repo: r
    rev: v1
    hooks:
      - id: wrapper
        entry: sh -c 'sh -c "sleep 1; echo late > marker.txt"; true'
        pass_filenames: false
        always_run: true
"#,
        &[],
    );
    let cancel = CancelToken::new();
    let trigger = cancel.clone();
    let canceller = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(200));
        trigger.cancel();
    });

    let report = Runner::new(dir.path()).run(&plan, &cancel);
    canceller.join().expect("canceller thread");
    assert_eq!(report.results[0].outcome, Outcome::Cancelled);

    std::thread::sleep(Duration::from_millis(1500));
    assert!(!dir.path().join("marker.txt").exists());
}

#[test]
fn test_cancel_before_start_runs_nothing() {
    let dir = workspace(&[("a.py", "")]);
    let plan = build_plan(
        r#"
repos:
  - repo: r
    rev: v1
    hooks:
      - id: one
        entry: "true"
"#,
        &["a.py"],
    );
    let cancel = CancelToken::new();
    cancel.cancel();

    let report = Runner::new(dir.path()).run(&plan, &cancel);
    assert!(report.results.is_empty());
    assert_eq!(report.summary.verdict, Verdict::Cancelled);
    assert_eq!(report.summary.exit_code(), 130);
}

#[test]
fn test_cancel_kills_in_flight_unit() {
    let dir = workspace(&[]);
    let plan = build_plan(
        r#"
repos:
  - repo: r
    rev: v1
    hooks:
      - id: slow
        entry: sleep 5
        pass_filenames: false
        always_run: true
      - id: never
        entry: "true"
        always_run: true
"#,
        &[],
    );
    let cancel = CancelToken::new();
    let trigger = cancel.clone();
    let canceller = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(200));
        trigger.cancel();
    });

    let report = Runner::new(dir.path()).run(&plan, &cancel);
    canceller.join().expect("canceller thread");

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].outcome, Outcome::Cancelled);
    assert_eq!(report.summary.verdict, Verdict::Cancelled);
}

#[test]
fn test_fail_fast_stops_after_first_failure() {
    let dir = workspace(&[("a.py", "")]);
    let plan = build_plan(
        r#"
fail_fast: true
repos:
  - repo: r
    rev: v1
    hooks:
      - id: first
        entry: "false"
      - id: second
        entry: "true"
"#,
        &["a.py"],
    );
    let report = Runner::new(dir.path()).run(&plan, &CancelToken::new());
    assert_eq!(report.results.len(), 1);
    assert!(report.summary.short_circuited);
    assert_eq!(report.summary.verdict, Verdict::Fail);
}

#[test]
fn test_continues_after_failure_by_default() {
    let dir = workspace(&[("a.py", "")]);
    let plan = build_plan(
        r#"
repos:
  - repo: r
    rev: v1
    hooks:
      - id: first
        entry: "false"
      - id: second
        entry: "false"
      - id: third
        entry: "true"
"#,
        &["a.py"],
    );
    let report = Runner::new(dir.path()).run(&plan, &CancelToken::new());
    assert_eq!(report.results.len(), 3);
    assert!(!report.summary.short_circuited);
    assert_eq!(report.summary.failed, 2);
}

#[test]
fn test_fixer_reports_modified_files() {
    let dir = workspace(&[("a.txt", "a"), ("b.txt", "b"), ("c.txt", "c")]);
    let plan = build_plan(
        r#"
repos:
  - repo: local
    rev: v1
    hooks:
      - id: end-of-file-fixer
        entry: sh -c 'for f in "$@"; do case "$f" in c.txt) ;; *) printf "\n" >> "$f";; esac; done; exit 1' --
"#,
        &["a.txt", "b.txt", "c.txt"],
    );
    let report = Runner::new(dir.path()).run(&plan, &CancelToken::new());

    assert_eq!(report.results[0].outcome, Outcome::Failed);
    assert_eq!(report.results[0].modified_files, 2);
    let content = std::fs::read_to_string(dir.path().join("a.txt")).unwrap();
    assert_eq!(content, "a\n");
}

#[test]
fn test_executor_runs_in_workspace_root() {
    let dir = workspace(&[("marker.txt", "")]);
    let plan = build_plan(
        r#"
repos:
  - repo: r
    rev: v1
    hooks:
      - id: check-marker
        entry: test -f
"#,
        &["marker.txt"],
    );
    let result = HookExecutor::new(dir.path()).execute(&plan.units[0], &CancelToken::new());
    assert_eq!(result.outcome, Outcome::Passed);
}

#[test]
fn test_report_written_as_json() {
    let dir = workspace(&[("a.py", "")]);
    let plan = build_plan(
        r#"
repos:
  - repo: r
    rev: v1
    hooks:
      - id: one
        entry: "true"
"#,
        &["a.py"],
    );
    let report = Runner::new(dir.path()).run(&plan, &CancelToken::new());
    let path = dir.path().join("report.json");
    report.write_json(&path).expect("report should be written");

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["summary"]["verdict"], "pass");
    assert_eq!(json["results"][0]["id"], "one");
}
