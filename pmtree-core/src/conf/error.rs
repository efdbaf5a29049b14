use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Discovery
    //-------------------------------------------------------------------------
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },

    //-------------------------------------------------------------------------
    // Recipes
    //-------------------------------------------------------------------------
    #[error("invalid recipe file: {path}\n\n{reason}")]
    ParseRecipe { path: PathBuf, reason: String },

    #[error("invalid recipe: {reason}")]
    InvalidRecipe { reason: String },

    //-------------------------------------------------------------------------
    // Environment
    //-------------------------------------------------------------------------
    #[error("invalid environment file: {path}\n\n{reason}")]
    ParseEnvironment { path: PathBuf, reason: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }
}
