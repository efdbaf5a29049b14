use clap::Parser;
use pmtree_core::cli::{self, Cli};
use pmtree_core::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.log_format);

    match cli::run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            cli::print_error(&err);
            ExitCode::FAILURE
        }
    }
}
