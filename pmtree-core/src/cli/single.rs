use crate::conf::ConfigError;
use crate::report::ReportFormat;
use crate::rewriter::CollectionTreeRewriter;
use crate::rule::RewriteRule;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

/// Rewrites one collection file in place, or prints it when `dry_run` is set.
///
/// Nothing is written unless the whole rule chain succeeded.
pub(crate) fn rewrite(
    path: &Path,
    rules: &[RewriteRule],
    dry_run: bool,
    format: ReportFormat,
) -> Result<ExitCode> {
    let rewriter = CollectionTreeRewriter::new(rules)?;

    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let (text, report) = rewriter
        .rewrite_to_string(&raw)
        .with_context(|| format!("failed to rewrite {}", path.display()))?;

    if dry_run {
        println!("{text}");
    } else {
        write_atomically(path, &text)?;
        info!(
            path = %path.display(),
            rules = ?rewriter.rule_names(),
            changes = report.changes.len(),
            "collection saved"
        );
    }

    if !report.is_empty() {
        eprint!("{}", report.render(format));
    }
    Ok(ExitCode::SUCCESS)
}

/// Stages the text next to `path` and renames it over the original, so a
/// failed write never leaves a truncated collection behind.
pub(crate) fn write_atomically(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);

    fs::write(&staging, contents).map_err(|e| ConfigError::write_file(path, e))?;
    if let Err(err) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(ConfigError::write_file(path, err));
    }
    Ok(())
}
