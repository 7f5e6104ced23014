//! CLI Tooling
//!
//! Argument parsing for the `dirlist` and `anagrams` binaries and the context
//! that runs each pipeline. Execution returns the rendered report; printing
//! and exit codes stay in the binaries.

use crate::anagram::{self, SignatureGroups, BUILTIN_WORDS};
use crate::config::{ConfigLoader, ListgramConfig};
use crate::error::ListError;
use crate::format::OutputFormat;
use crate::listing::{self, SortOrder};
use crate::logging::LoggingConfig;
use clap::{Args, Parser};
use std::path::{Path, PathBuf};
use tracing::info;

/// Logging and configuration flags shared by both binaries.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Report format (text, json, table)
    #[arg(long)]
    pub format: Option<String>,
}

/// List a directory's immediate contents sorted by size
#[derive(Parser, Debug)]
#[command(name = "dirlist")]
#[command(about = "List a directory's immediate contents sorted by size")]
pub struct DirListCli {
    /// Directory to list
    pub path: Option<PathBuf>,

    /// Sort largest first
    #[arg(long)]
    pub reverse: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Report every pair of anagrams in a word list
#[derive(Parser, Debug)]
#[command(name = "anagrams")]
#[command(about = "Report every pair of anagrams in a word list")]
pub struct AnagramCli {
    /// Word to check; repeat to build a list. Defaults to the built-in list.
    #[arg(long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Resolved configuration for one run.
pub struct CliContext {
    config: ListgramConfig,
}

impl CliContext {
    /// Load configuration from `config_path` (if any) and the environment.
    pub fn new(config_path: Option<&Path>) -> Result<Self, ListError> {
        Ok(Self {
            config: ConfigLoader::load(config_path)?,
        })
    }

    pub fn with_config(config: ListgramConfig) -> Self {
        Self { config }
    }

    /// Logging config with CLI flags folded over the loaded configuration.
    pub fn logging_config(&self, args: &CommonArgs) -> LoggingConfig {
        let mut logging = self.config.logging.clone();
        if args.verbose {
            logging.level = "debug".to_string();
        }
        if let Some(level) = &args.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &args.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &args.log_output {
            logging.output = output.clone();
        }
        if args.log_file.is_some() {
            logging.file = args.log_file.clone();
        }
        logging
    }

    fn output_format(&self, args: &CommonArgs) -> Result<OutputFormat, ListError> {
        match &args.format {
            Some(flag) => flag.parse(),
            None => Ok(self.config.output.format),
        }
    }

    /// Validate, enumerate, sort, and render the directory named on the command line.
    pub fn list_directory(&self, cli: &DirListCli) -> Result<String, ListError> {
        let path = cli.path.as_deref().ok_or(ListError::MissingArgument)?;
        let format = self.output_format(&cli.common)?;
        let order = if cli.reverse {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        let entries = listing::list_directory(path, order)?;
        listing::report(&entries, format)
    }

    /// Group the word list by signature and render every anagram pair.
    pub fn find_anagrams(&self, cli: &AnagramCli) -> Result<String, ListError> {
        let format = self.output_format(&cli.common)?;
        let words: Vec<&str> = if cli.words.is_empty() {
            BUILTIN_WORDS.to_vec()
        } else {
            cli.words.iter().map(String::as_str).collect()
        };
        let groups = SignatureGroups::index(&words);
        info!(
            words = words.len(),
            groups = groups.len(),
            pairs = groups.pair_count(),
            "Computed anagram pairs"
        );
        anagram::report(groups.pairs(), format)
    }
}
