use crate::conf::ConfigError;
use glob::glob;
use std::path::{Path, PathBuf};

/// Naming convention for collection files in batch mode.
pub const COLLECTION_GLOB: &str = "*.postman.json";

/// Discovers files matching a glob pattern.
///
/// Searches the filesystem for all files that match the given glob pattern
/// relative to `root` and returns their paths in sorted order. Unreadable
/// entries and directories are silently filtered out.
///
/// # Arguments
///
/// * `root` - Directory the pattern is resolved against
/// * `glob_pattern` - A glob pattern string (e.g., `"*.postman.json"`)
///
/// # Errors
///
/// Returns `ConfigError::Glob` if the pattern is malformed or cannot be parsed.
pub fn discover(root: &Path, glob_pattern: &str) -> Result<Vec<PathBuf>, ConfigError> {
    let pattern = &resolve_glob(root, glob_pattern);
    let mut paths: Vec<_> = glob(pattern)
        .map_err(|e| ConfigError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

/// Resolves a glob pattern relative to a root directory.
///
/// Joins the given `pattern` to the `root` path and returns it as a string.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    root.join(pattern).to_string_lossy().into_owned()
}
