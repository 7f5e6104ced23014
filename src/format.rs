//! Output format selection shared by both reporters.

use crate::error::ListError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a reporter renders its records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One plain line per record.
    #[default]
    Text,
    Json,
    Table,
}

impl FromStr for OutputFormat {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            other => Err(ListError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
        };
        f.write_str(name)
    }
}

/// Join rendered lines, terminating each with a newline.
pub(crate) fn join_lines<I>(lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut out = String::new();
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
