//! Batch rewriting over a directory of collections.
//!
//! Every file gets its own load → transform → save pipeline on the tokio
//! runtime. Pipelines share nothing mutable: the planner is immutable and
//! handed out by `Arc`. A file is written only after its whole rule chain
//! succeeded, and one file failing never stops its siblings.

mod config;
mod error;
mod plan;
mod runner;
mod summary;

pub use config::*;
pub use error::BatchError;
pub use plan::*;
pub use runner::*;
pub use summary::*;

use crate::conf::{ConfigError, discover, load_environment};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// The URL-rewrite use case: route every collection in `dir` through its
/// microservice prefix using variables from the environment file.
pub async fn rewrite_urls(
    dir: &Path,
    environment: &Path,
    pattern: &str,
    write: bool,
) -> Result<BatchSummary, ConfigError> {
    if !dir.is_dir() {
        return Err(ConfigError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let environment = load_environment(environment)?;
    let config = BatchConfig::from_environment(&environment);
    if config.base_url.is_none() {
        warn!("environment has no baseURL entry");
    }

    let files = discover(dir, pattern)?;
    info!(
        dir = %dir.display(),
        files = files.len(),
        services = config.service_variables.len(),
        "rewriting collection urls"
    );

    let runner = BatchRunner::new(Arc::new(UrlRewritePlanner::new(Arc::new(config))), write);
    Ok(runner.run(files).await)
}

/// Applies a fixed rule chain to every matching collection in `dir`.
pub async fn apply_recipe(
    dir: &Path,
    planner: RecipePlanner,
    pattern: &str,
    write: bool,
) -> Result<BatchSummary, ConfigError> {
    if !dir.is_dir() {
        return Err(ConfigError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let files = discover(dir, pattern)?;
    info!(dir = %dir.display(), files = files.len(), "applying recipe");

    let runner = BatchRunner::new(Arc::new(planner), write);
    Ok(runner.run(files).await)
}
