//! Directory entry records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// What a directory child is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, sockets, fifos, devices. Listed but never reported.
    Other,
}

impl EntryKind {
    pub fn from_file_type(file_type: std::fs::FileType) -> Self {
        if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }

    /// Report label, `None` for entries that are filtered out.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            EntryKind::File => Some("File"),
            EntryKind::Directory => Some("Directory"),
            EntryKind::Other => None,
        }
    }
}

/// One immediate child of a listed directory.
///
/// For directories `size_bytes` is the raw metadata length, not the size of
/// their contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
    pub kind: EntryKind,
}

impl fmt::Display for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.kind.label().unwrap_or("Other");
        write!(
            f,
            "{label} Path:{}, {label} Name:{}, {label} Size:{} bytes",
            self.path.display(),
            self.name,
            self.size_bytes
        )
    }
}
