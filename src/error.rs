//! Error types for the listing and anagram pipelines.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library.
///
/// The first three variants are user-input validation failures. They are
/// detected before any enumeration so no partial listing is ever produced.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("Please provide a directory filepath as input")]
    MissingArgument,

    #[error("Directory given doesn't exist")]
    NotFound(PathBuf),

    #[error("File given but directory is expected")]
    NotADirectory(PathBuf),

    #[error("Failed to read directory {path:?}: {source}")]
    Enumeration {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid output format: {0} (must be 'text', 'json', or 'table')")]
    InvalidFormat(String),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl ListError {
    /// True for errors caused by what the user typed rather than by the filesystem.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ListError::MissingArgument | ListError::NotFound(_) | ListError::NotADirectory(_)
        )
    }
}

impl From<config::ConfigError> for ListError {
    fn from(err: config::ConfigError) -> Self {
        ListError::ConfigError(err.to_string())
    }
}
