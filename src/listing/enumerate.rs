//! Enumerating the immediate children of a directory.

use crate::error::ListError;
use crate::listing::types::{DirectoryEntry, EntryKind};
use std::path::Path;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// List the immediate children of `dir`, non-recursively, in filesystem order.
///
/// Symlinks are not followed; they come back as [`EntryKind::Other`] with the
/// link's own metadata size. The directory handle is released when this returns.
pub fn enumerate(dir: &Path) -> Result<Vec<DirectoryEntry>, ListError> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    let mut entries = Vec::new();
    for item in walker {
        let item = item.map_err(|source| ListError::Enumeration {
            path: dir.to_path_buf(),
            source,
        })?;
        let metadata = item.metadata().map_err(|source| ListError::Enumeration {
            path: item.path().to_path_buf(),
            source,
        })?;
        let entry = DirectoryEntry {
            path: dir.join(item.file_name()),
            name: item.file_name().to_string_lossy().into_owned(),
            size_bytes: metadata.len(),
            kind: EntryKind::from_file_type(item.file_type()),
        };
        trace!(path = %entry.path.display(), size = entry.size_bytes, "Enumerated entry");
        entries.push(entry);
    }

    debug!(path = %dir.display(), count = entries.len(), "Enumerated directory");
    Ok(entries)
}
