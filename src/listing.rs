//! Size-sorted listing of a directory's immediate children.

pub mod enumerate;
pub mod report;
pub mod sort;
pub mod types;
pub mod validate;

pub use enumerate::enumerate;
pub use report::report;
pub use sort::{sort_by_size, SortOrder};
pub use types::{DirectoryEntry, EntryKind};
pub use validate::validate_directory;

use crate::error::ListError;
use std::path::Path;
use tracing::info;

/// Validate, enumerate, then sort `path`'s children.
///
/// Validation runs first; nothing is enumerated for an invalid path.
pub fn list_directory(path: &Path, order: SortOrder) -> Result<Vec<DirectoryEntry>, ListError> {
    validate_directory(path)?;
    let entries = enumerate(path)?;
    let sorted = sort_by_size(entries, order);
    info!(path = %path.display(), entries = sorted.len(), "Listed directory");
    Ok(sorted)
}
