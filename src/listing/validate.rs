//! Path validation before enumeration.

use crate::error::ListError;
use std::path::Path;
use tracing::debug;

/// Succeed only if something exists at `path` and it is a directory.
///
/// Follows symlinks, so a link to a directory is accepted.
pub fn validate_directory(path: &Path) -> Result<(), ListError> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Path does not resolve");
            return Err(ListError::NotFound(path.to_path_buf()));
        }
    };
    if !metadata.is_dir() {
        debug!(path = %path.display(), "Path is not a directory");
        return Err(ListError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}
