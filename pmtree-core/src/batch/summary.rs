use crate::batch::BatchError;
use crate::report::{ReportFormat, RewriteReport};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug)]
pub enum FileStatus {
    Rewritten(RewriteReport),
    Skipped(String),
}

#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<FileStatus, BatchError>,
}

/// Per-file results of a batch, sorted by path.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<FileOutcome>,
    /// Tasks that panicked or were cancelled before producing an outcome.
    pub aborted: usize,
}

#[derive(Serialize)]
struct OutcomeJson<'a> {
    path: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a RewriteReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

#[derive(Serialize)]
struct SummaryJson<'a> {
    rewritten: usize,
    skipped: usize,
    failed: usize,
    files: Vec<OutcomeJson<'a>>,
}

impl BatchSummary {
    pub fn rewritten(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, Ok(FileStatus::Rewritten(_))))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, Ok(FileStatus::Skipped(_))))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count() + self.aborted
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    pub fn outcome(&self, path: &std::path::Path) -> Option<&FileOutcome> {
        self.outcomes.iter().find(|o| o.path == path)
    }

    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Plain => self.render_plain(),
            ReportFormat::Pretty => self.render_pretty(),
            ReportFormat::Json => self.render_json(),
        }
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for outcome in &self.outcomes {
            let path = outcome.path.display();
            match &outcome.result {
                Ok(FileStatus::Rewritten(report)) => {
                    let _ = writeln!(out, "{path}: rewritten ({} changes)", report.changes.len());
                    for warning in &report.warnings {
                        let _ = writeln!(out, "{path}:warning: {}", warning.message);
                    }
                }
                Ok(FileStatus::Skipped(reason)) => {
                    let _ = writeln!(out, "{path}: skipped: {reason}");
                }
                Err(err) => {
                    let _ = writeln!(out, "{path}:error: {err}");
                }
            }
        }
        let _ = writeln!(
            out,
            "{} rewritten, {} skipped, {} failed",
            self.rewritten(),
            self.skipped(),
            self.failed()
        );
        out
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();
        for outcome in &self.outcomes {
            let path = outcome.path.display();
            match &outcome.result {
                Ok(FileStatus::Rewritten(report)) => {
                    let _ = writeln!(
                        out,
                        "{} {path} ({} changes)",
                        "✔".green(),
                        report.changes.len()
                    );
                    for warning in &report.warnings {
                        let _ = writeln!(
                            out,
                            "  {}: {}",
                            "warning".yellow().bold(),
                            warning.message
                        );
                    }
                }
                Ok(FileStatus::Skipped(reason)) => {
                    let _ = writeln!(out, "{} {path}: {reason}", "-".dimmed());
                }
                Err(err) => {
                    let _ = writeln!(out, "{} {path}", "✘".red());
                    let _ = writeln!(out, "  {}: {err}", "error".red().bold());
                }
            }
        }
        let _ = writeln!(
            out,
            "\n{} rewritten, {} skipped, {} failed",
            self.rewritten(),
            self.skipped(),
            self.failed()
        );
        out
    }

    pub fn render_json(&self) -> String {
        let files = self
            .outcomes
            .iter()
            .map(|o| {
                let path = o.path.display().to_string();
                match &o.result {
                    Ok(FileStatus::Rewritten(report)) => OutcomeJson {
                        path,
                        status: "rewritten",
                        report: Some(report),
                        reason: None,
                    },
                    Ok(FileStatus::Skipped(reason)) => OutcomeJson {
                        path,
                        status: "skipped",
                        report: None,
                        reason: Some(reason.clone()),
                    },
                    Err(err) => OutcomeJson {
                        path,
                        status: "failed",
                        report: None,
                        reason: Some(err.to_string()),
                    },
                }
            })
            .collect();

        let json = SummaryJson {
            rewritten: self.rewritten(),
            skipped: self.skipped(),
            failed: self.failed(),
            files,
        };
        serde_json::to_string_pretty(&json).unwrap_or_default()
    }
}
