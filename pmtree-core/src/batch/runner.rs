use crate::batch::BatchError;
use crate::batch::plan::{FilePlanner, PlanDecision};
use crate::batch::summary::{BatchSummary, FileOutcome, FileStatus};
use crate::collection::CollectionDocument;
use crate::report::RewriteReport;
use crate::rewriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

pub struct BatchRunner {
    planner: Arc<dyn FilePlanner>,
    write: bool,
}

impl BatchRunner {
    /// `write = false` runs every pipeline but leaves files untouched.
    pub fn new(planner: Arc<dyn FilePlanner>, write: bool) -> Self {
        Self { planner, write }
    }

    pub async fn run(&self, files: Vec<PathBuf>) -> BatchSummary {
        let mut tasks = JoinSet::new();

        for path in files {
            let planner = Arc::clone(&self.planner);
            let write = self.write;
            tasks.spawn(async move {
                let result = process_file(&path, planner.as_ref(), write).await;
                FileOutcome { path, result }
            });
        }

        let mut summary = BatchSummary::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => {
                    if let Err(err) = &outcome.result {
                        warn!(error = %err, "collection skipped after failure");
                    }
                    summary.outcomes.push(outcome);
                }
                Err(err) => {
                    error!(error = %err, "collection task aborted");
                    summary.aborted += 1;
                }
            }
        }

        summary.outcomes.sort_by(|a, b| a.path.cmp(&b.path));
        summary
    }
}

async fn process_file(
    path: &Path,
    planner: &dyn FilePlanner,
    write: bool,
) -> Result<FileStatus, BatchError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| BatchError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let rewrite_error = |source| BatchError::Rewrite {
        path: path.to_path_buf(),
        source,
    };

    let document = CollectionDocument::parse(&raw).map_err(rewrite_error)?;

    let mut report = RewriteReport::default();
    let rules = match planner.plan(path, &document, &mut report) {
        PlanDecision::Apply(rules) => rules,
        PlanDecision::Skip(reason) => {
            info!(path = %path.display(), reason = %reason, "collection skipped");
            return Ok(FileStatus::Skipped(reason));
        }
    };

    if let Some(warning) = document.substitution_warning() {
        report.warning(warning, Some(&CollectionDocument::items_path()));
    }

    let rewritten = rewriter::apply_rules(document, &rules).map_err(rewrite_error)?;
    report.extend(rewritten.report);
    let text = rewritten.document.serialize().map_err(rewrite_error)?;

    if write {
        write_atomically(path, &text).await?;
    }

    info!(
        path = %path.display(),
        changes = report.changes.len(),
        written = write,
        "collection rewritten"
    );
    Ok(FileStatus::Rewritten(report))
}

/// Writes next to the target and renames over it, so readers never observe a
/// truncated collection.
async fn write_atomically(path: &Path, contents: &str) -> Result<(), BatchError> {
    let write_error = |source| BatchError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);

    tokio::fs::write(&staging, contents)
        .await
        .map_err(write_error)?;
    if let Err(err) = tokio::fs::rename(&staging, path).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(write_error(err));
    }
    Ok(())
}
