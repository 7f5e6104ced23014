//! Listgram: size-sorted directory listing and anagram pair finding.
//!
//! Two independent pipelines share only the ambient stack (errors, logging,
//! configuration, output formats):
//!
//! - [`listing`] validates a directory, enumerates its immediate children,
//!   and sorts them by size.
//! - [`anagram`] buckets words by character-frequency signature and
//!   enumerates every pair within each bucket.

pub mod anagram;
pub mod config;
pub mod error;
pub mod format;
pub mod listing;
pub mod logging;
pub mod tooling;
