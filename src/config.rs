//! Configuration loading.
//!
//! Precedence: built-in defaults (lowest) -> optional config file -> environment (highest).
//! Environment keys use the `LISTGRAM_` prefix and `__` for nesting, e.g.
//! `LISTGRAM__OUTPUT__FORMAT=json`.

use crate::error::ListError;
use crate::format::OutputFormat;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Report rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Top-level configuration shared by both binaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListgramConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, then `file` when given, then the environment overlay.
    pub fn load(file: Option<&Path>) -> Result<ListgramConfig, ListError> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            if !path.exists() {
                return Err(ListError::ConfigError(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(
            Environment::with_prefix("LISTGRAM")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
