//! Tooling Layer
//!
//! Command-line entry points for the listing and anagram pipelines.

pub mod cli;

pub use cli::{AnagramCli, CliContext, CommonArgs, DirListCli};
