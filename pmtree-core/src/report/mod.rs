use crate::collection::NodePath;
use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;

#[cfg(test)]
mod tests;

/// One mutation applied by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    pub rule: &'static str,
    pub path: NodePath,
    pub description: String,
}

/// A permissive recovery the caller should know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub message: String,
    pub path: Option<NodePath>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Plain,
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    pub changes: Vec<ChangeRecord>,
    pub warnings: Vec<Warning>,
}

impl RewriteReport {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.warnings.is_empty()
    }

    pub fn change(&mut self, rule: &'static str, path: &NodePath, description: impl Into<String>) {
        self.changes.push(ChangeRecord {
            rule,
            path: path.clone(),
            description: description.into(),
        });
    }

    pub fn warning(&mut self, message: impl Into<String>, path: Option<&NodePath>) {
        self.warnings.push(Warning {
            message: message.into(),
            path: path.cloned(),
        });
    }

    pub fn changes_for(&self, rule: &str) -> impl Iterator<Item = &ChangeRecord> {
        self.changes.iter().filter(move |c| c.rule == rule)
    }

    pub fn extend(&mut self, other: Self) {
        self.changes.extend(other.changes);
        self.warnings.extend(other.warnings);
    }

    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Plain => self.render_plain(),
            ReportFormat::Pretty => self.render_pretty(),
            ReportFormat::Json => self.render_json(),
        }
    }

    pub fn render_json(&self) -> String {
        // A report only holds strings, so serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for change in &self.changes {
            let _ = writeln!(out, "{}:{}: {}", change.path, change.rule, change.description);
        }
        for warning in &self.warnings {
            match &warning.path {
                Some(path) => {
                    let _ = writeln!(out, "{}:warning: {}", path, warning.message);
                }
                None => {
                    let _ = writeln!(out, "warning: {}", warning.message);
                }
            }
        }
        out
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();

        let mut by_rule: Vec<(&'static str, usize)> = Vec::new();
        for change in &self.changes {
            match by_rule.iter_mut().find(|(rule, _)| *rule == change.rule) {
                Some((_, count)) => *count += 1,
                None => by_rule.push((change.rule, 1)),
            }
        }

        for (rule, count) in by_rule {
            let _ = writeln!(out, "{} {}: {} changes", "✔".green(), rule.bold(), count);
        }

        for warning in &self.warnings {
            let location = warning
                .path
                .as_ref()
                .map(|p| format!(" ({p})"))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "  {}: {}{}",
                "warning".yellow().bold(),
                warning.message,
                location
            );
        }
        out
    }
}
