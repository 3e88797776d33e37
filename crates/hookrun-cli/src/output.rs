// Rust guideline compliant 2026-02-06

//! Output formatting module for the hookrun CLI.
//!
//! This module renders run reports, execution plans and errors in the
//! supported output formats (JSON, table, plain text).

use crate::terminal::{paint, report_width};
use hookrun_core::{Manifest, OutputFormat, Plan};
use hookrun_runner::{RunReport, RunResult, RunSummary, Verdict};
use serde_json::json;
use tabled::{builder::Builder, settings::Style};
use termcolor::Color;

/// Output formatter trait.
///
/// Defines the interface for rendering hookrun data in different output formats.
pub trait OutputFormatter {
    /// Formats the report of a finished run.
    fn format_report(&self, report: &RunReport) -> String;

    /// Formats an execution plan.
    fn format_plan(&self, plan: &Plan) -> String;

    /// Formats the confirmation that a manifest is valid.
    fn format_validation(&self, manifest: &Manifest) -> String;

    /// Formats a fatal error message.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats data as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RunReport) -> String {
        serde_json::to_string_pretty(report)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize report" }).to_string())
    }

    fn format_plan(&self, plan: &Plan) -> String {
        let output = json!({
            "units": plan.units,
            "total": plan.len(),
            "fail_fast": plan.fail_fast,
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize plan" }).to_string())
    }

    fn format_validation(&self, manifest: &Manifest) -> String {
        json!({
            "valid": true,
            "repos": manifest.repos.len(),
            "hooks": manifest.hook_count(),
        })
        .to_string()
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats reports and plans as human-readable tables.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_report(&self, report: &RunReport) -> String {
        if report.results.is_empty() {
            return format!("No hooks ran.\n{}", summary_line(&report.summary, self.use_color));
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["#", "Hook", "Result", "Exit", "Modified", "Time (ms)"]);

        for (idx, result) in report.results.iter().enumerate() {
            builder.push_record(vec![
                (idx + 1).to_string(),
                result.name.clone(),
                result_label(result).to_string(),
                result
                    .exit_code
                    .map(|code| code.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                result.modified_files.to_string(),
                result.duration.as_millis().to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        let mut output = table.to_string();
        output.push('\n');
        output.push_str(&failure_details(&report.results));
        output.push_str(&summary_line(&report.summary, self.use_color));
        output
    }

    fn format_plan(&self, plan: &Plan) -> String {
        if plan.is_empty() {
            return "No hooks planned.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["#", "Hook", "Repo", "Rev", "Command", "Files", "Fixer"]);

        for (idx, unit) in plan.units.iter().enumerate() {
            let mut command = vec![unit.program.clone()];
            command.extend(unit.args.iter().cloned());
            builder.push_record(vec![
                (idx + 1).to_string(),
                unit.id.clone(),
                unit.repo.clone(),
                unit.rev.clone(),
                command.join(" "),
                unit.files.len().to_string(),
                if unit.fixer { "yes" } else { "no" }.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_validation(&self, manifest: &Manifest) -> String {
        format!(
            "{} {} repos, {} hooks",
            paint("Manifest OK:", Color::Green, self.use_color),
            manifest.repos.len(),
            manifest.hook_count()
        )
    }

    fn format_error(&self, error: &str) -> String {
        format!("{} {}", paint("Error:", Color::Red, self.use_color), error)
    }
}

/// Plain text output formatter.
///
/// One dotted line per hook, followed by the output of failing hooks.
pub struct PlainFormatter {
    width: usize,
    use_color: bool,
}

impl PlainFormatter {
    /// Creates a plain formatter producing lines `width` columns wide.
    pub fn new(width: usize, use_color: bool) -> Self {
        Self { width, use_color }
    }

    fn dotted(&self, name: &str, suffix: &str, label: &str, color: Color) -> String {
        let used = name.chars().count() + suffix.chars().count() + label.chars().count();
        let dots = ".".repeat(self.width.saturating_sub(used).max(1));
        format!("{}{}{}{}", name, dots, suffix, paint(label, color, self.use_color))
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_report(&self, report: &RunReport) -> String {
        let mut output = String::new();
        for result in &report.results {
            let line = if result.skipped {
                self.dotted(&result.name, "(no files to check)", "Skipped", Color::Cyan)
            } else {
                self.dotted(&result.name, "", result.outcome.label(), outcome_color(result))
            };
            output.push_str(&line);
            output.push('\n');
            if result.outcome.is_failure() {
                output.push_str(&detail(result));
            }
        }
        output.push_str(&summary_line(&report.summary, self.use_color));
        output
    }

    fn format_plan(&self, plan: &Plan) -> String {
        if plan.is_empty() {
            return "No hooks planned.".to_string();
        }

        let mut output = String::new();
        for (idx, unit) in plan.units.iter().enumerate() {
            let mut command = vec![unit.program.clone()];
            command.extend(unit.args.iter().cloned());
            output.push_str(&format!(
                "{}. {} ({}@{}) {} [{} files]\n",
                idx + 1,
                unit.id,
                unit.repo,
                unit.rev,
                command.join(" "),
                unit.files.len()
            ));
        }
        output
    }

    fn format_validation(&self, manifest: &Manifest) -> String {
        format!(
            "Manifest OK: {} repos, {} hooks",
            manifest.repos.len(),
            manifest.hook_count()
        )
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

fn result_label(result: &RunResult) -> &'static str {
    if result.skipped {
        "Skipped"
    } else {
        result.outcome.label()
    }
}

fn outcome_color(result: &RunResult) -> Color {
    if result.outcome.is_failure() {
        Color::Red
    } else if result.outcome == hookrun_runner::Outcome::Cancelled {
        Color::Yellow
    } else {
        Color::Green
    }
}

fn detail(result: &RunResult) -> String {
    let mut output = format!("- hook id: {}\n", result.id);
    match result.exit_code {
        Some(code) => output.push_str(&format!("- exit code: {}\n", code)),
        None => output.push_str("- no exit code\n"),
    }
    if result.modified_files > 0 {
        output.push_str(&format!(
            "- files were modified by this hook ({})\n",
            result.modified_files
        ));
    }
    if !result.output.trim().is_empty() {
        output.push('\n');
        output.push_str(result.output.trim_end());
        output.push('\n');
    }
    output.push('\n');
    output
}

fn failure_details(results: &[RunResult]) -> String {
    results
        .iter()
        .filter(|result| result.outcome.is_failure())
        .map(|result| format!("{}:\n{}", result.name, detail(result)))
        .collect()
}

fn summary_line(summary: &RunSummary, use_color: bool) -> String {
    let verdict = match summary.verdict {
        Verdict::Pass => paint("PASS", Color::Green, use_color),
        Verdict::Fail => paint("FAIL", Color::Red, use_color),
        Verdict::Cancelled => paint("CANCELLED", Color::Yellow, use_color),
    };
    let mut line = format!(
        "{}: {} hooks, {} passed ({} skipped), {} failed, {} errors",
        verdict, summary.total, summary.passed, summary.skipped, summary.failed, summary.errored
    );
    if summary.short_circuited {
        line.push_str("; stopped after first failure");
    }
    line.push('\n');
    line
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter::new(report_width(), use_color)),
    }
}
