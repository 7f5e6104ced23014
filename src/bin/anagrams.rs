//! Anagram pair finder binary.

use anyhow::Context;
use clap::Parser;
use listgram::logging::init_logging;
use listgram::tooling::cli::{AnagramCli, CliContext};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = AnagramCli::parse();

    let context = match init(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match context.find_anagrams(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init(cli: &AnagramCli) -> anyhow::Result<CliContext> {
    let context = CliContext::new(cli.common.config.as_deref())
        .context("Error initializing configuration")?;
    init_logging(Some(&context.logging_config(&cli.common)))
        .context("Error initializing logging")?;
    Ok(context)
}
