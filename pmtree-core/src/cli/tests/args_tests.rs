use crate::cli::{Cli, Command};
use crate::logging::LogFormat;
use crate::report::ReportFormat;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn auth_header_defaults_to_bearer_token() {
    let cli = Cli::try_parse_from(["pmtree", "auth-header", "orders.postman.json"]).unwrap();

    let Command::AuthHeader {
        path,
        key,
        value,
        dry_run,
    } = cli.command
    else {
        panic!("expected auth-header");
    };
    assert_eq!(path, Some(PathBuf::from("orders.postman.json")));
    assert_eq!(key, "Authorization");
    assert_eq!(value, "Bearer {{access_token}}");
    assert!(!dry_run);
    assert_eq!(cli.report, ReportFormat::Pretty);
    assert_eq!(cli.log_format, None);
}

#[test]
fn global_flags_are_accepted_after_the_subcommand() {
    let cli = Cli::try_parse_from([
        "pmtree",
        "group",
        "c.json",
        "--depth",
        "3",
        "--report",
        "json",
        "--log-format",
        "json",
    ])
    .unwrap();

    assert!(matches!(cli.command, Command::Group { depth: 3, .. }));
    assert_eq!(cli.report, ReportFormat::Json);
    assert_eq!(cli.log_format, Some(LogFormat::Json));
}

#[test]
fn path_is_optional_at_parse_time() {
    let cli = Cli::try_parse_from(["pmtree", "flatten"]).unwrap();

    assert!(matches!(cli.command, Command::Flatten { path: None, .. }));
}

#[test]
fn rewrite_urls_takes_environment_and_pattern() {
    let cli = Cli::try_parse_from([
        "pmtree",
        "rewrite-urls",
        "collections",
        "-e",
        "env.json",
        "--pattern",
        "*.json",
        "--dry-run",
    ])
    .unwrap();

    let Command::RewriteUrls {
        path,
        environment,
        pattern,
        dry_run,
    } = cli.command
    else {
        panic!("expected rewrite-urls");
    };
    assert_eq!(path, Some(PathBuf::from("collections")));
    assert_eq!(environment, Some(PathBuf::from("env.json")));
    assert_eq!(pattern, "*.json");
    assert!(dry_run);
}

#[test]
fn apply_requires_a_recipe() {
    let result = Cli::try_parse_from(["pmtree", "apply", "collections"]);

    assert!(result.is_err());
}
