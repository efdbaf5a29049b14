use crate::batch::{self, BatchSummary, RecipePlanner};
use crate::conf::load_recipe;
use crate::report::ReportFormat;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const ENVIRONMENT_FILE: &str = "postman_environment.json";

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the tokio runtime")
}

/// Environment file used when none is given: next to the collections directory.
pub(crate) fn default_environment(dir: &Path) -> PathBuf {
    dir.parent()
        .map(|parent| parent.join(ENVIRONMENT_FILE))
        .unwrap_or_else(|| PathBuf::from(ENVIRONMENT_FILE))
}

fn finish(summary: &BatchSummary, format: ReportFormat) -> ExitCode {
    eprint!("{}", summary.render(format));
    if summary.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

pub(crate) fn rewrite_urls(
    dir: PathBuf,
    environment: Option<PathBuf>,
    pattern: &str,
    dry_run: bool,
    format: ReportFormat,
) -> Result<ExitCode> {
    let environment = environment.unwrap_or_else(|| default_environment(&dir));
    let summary =
        runtime()?.block_on(batch::rewrite_urls(&dir, &environment, pattern, !dry_run))?;
    Ok(finish(&summary, format))
}

pub(crate) fn apply(
    path: PathBuf,
    recipe: &Path,
    pattern: &str,
    dry_run: bool,
    format: ReportFormat,
) -> Result<ExitCode> {
    let recipe = load_recipe(recipe)?;

    if path.is_dir() {
        let planner = RecipePlanner::new(recipe.rules);
        let summary = runtime()?.block_on(batch::apply_recipe(&path, planner, pattern, !dry_run))?;
        return Ok(finish(&summary, format));
    }

    super::single::rewrite(&path, &recipe.rules, dry_run, format)
}
