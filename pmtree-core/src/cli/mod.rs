mod batch;
mod check;
mod hint;
mod single;
#[cfg(test)]
mod tests;

pub use hint::{error_hint, print_error};

use crate::conf::COLLECTION_GLOB;
use crate::error::RewriteError;
use crate::logging::LogFormat;
use crate::report::ReportFormat;
use crate::rule::{DEFAULT_GROUP_DEPTH, RewriteRule};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const BEARER_TOKEN_VALUE: &str = "Bearer {{access_token}}";

#[derive(Parser, Debug)]
#[command(
    name = "pmtree",
    version,
    about = "pmtree: rewrite Postman collection trees"
)]
pub struct Cli {
    /// Log output format (pretty on a terminal, JSON otherwise)
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    /// How to print the change report
    #[arg(long, global = true, value_enum, default_value_t = ReportFormat::Pretty)]
    pub report: ReportFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add (or replace) an authorization header on every request
    AuthHeader {
        /// Collection file to rewrite in place
        path: Option<PathBuf>,

        #[arg(long, default_value = AUTHORIZATION_HEADER)]
        key: String,

        #[arg(long, default_value = BEARER_TOKEN_VALUE)]
        value: String,

        /// Print the rewritten collection instead of saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// Replace each top-level folder's children with its first child's children
    Flatten {
        path: Option<PathBuf>,

        #[arg(long)]
        dry_run: bool,
    },

    /// Regroup requests under their top-level folder
    Group {
        path: Option<PathBuf>,

        /// Folder levels to walk before collecting requests
        #[arg(long, default_value_t = DEFAULT_GROUP_DEPTH)]
        depth: usize,

        #[arg(long)]
        dry_run: bool,
    },

    /// Route every collection in a directory through its microservice prefix
    RewriteUrls {
        /// Directory holding the collections
        path: Option<PathBuf>,

        /// Postman environment file [default: postman_environment.json next to the directory]
        #[arg(short, long)]
        environment: Option<PathBuf>,

        #[arg(long, default_value = COLLECTION_GLOB)]
        pattern: String,

        /// Run every pipeline without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Apply a rule recipe to a collection file or directory
    Apply {
        path: Option<PathBuf>,

        /// Recipe file (YAML or JSON)
        #[arg(short, long)]
        recipe: PathBuf,

        /// File pattern used when PATH is a directory
        #[arg(long, default_value = COLLECTION_GLOB)]
        pattern: String,

        #[arg(long)]
        dry_run: bool,
    },

    /// Parse a collection and print its shape
    Check { path: Option<PathBuf> },
}

fn required(path: Option<PathBuf>) -> Result<PathBuf, RewriteError> {
    path.ok_or(RewriteError::MissingArgument { name: "PATH" })
}

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let format = cli.report;

    match cli.command {
        Command::AuthHeader {
            path,
            key,
            value,
            dry_run,
        } => single::rewrite(
            &required(path)?,
            &[RewriteRule::upsert_header(key, value)],
            dry_run,
            format,
        ),

        Command::Flatten { path, dry_run } => single::rewrite(
            &required(path)?,
            &[RewriteRule::FlattenOneLevel],
            dry_run,
            format,
        ),

        Command::Group {
            path,
            depth,
            dry_run,
        } => single::rewrite(
            &required(path)?,
            &[RewriteRule::GroupLeavesByAncestor { depth }],
            dry_run,
            format,
        ),

        Command::RewriteUrls {
            path,
            environment,
            pattern,
            dry_run,
        } => batch::rewrite_urls(required(path)?, environment, &pattern, dry_run, format),

        Command::Apply {
            path,
            recipe,
            pattern,
            dry_run,
        } => batch::apply(required(path)?, &recipe, &pattern, dry_run, format),

        Command::Check { path } => check::check(&required(path)?),
    }
}
