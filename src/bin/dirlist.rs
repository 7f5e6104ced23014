//! Directory lister binary.
//!
//! Prints the immediate contents of a directory, smallest first.

use anyhow::Context;
use clap::Parser;
use listgram::logging::init_logging;
use listgram::tooling::cli::{CliContext, DirListCli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = DirListCli::parse();

    let context = match init(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match context.list_directory(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(user_error = e.is_user_error(), "Listing failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init(cli: &DirListCli) -> anyhow::Result<CliContext> {
    let context = CliContext::new(cli.common.config.as_deref())
        .context("Error initializing configuration")?;
    init_logging(Some(&context.logging_config(&cli.common)))
        .context("Error initializing logging")?;
    Ok(context)
}
