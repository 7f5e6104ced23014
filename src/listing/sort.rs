//! Stable ordering of entries by size.

use crate::listing::types::DirectoryEntry;
use serde::{Deserialize, Serialize};

/// Direction of the size sort. Ties always keep enumeration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Sort `entries` by `size_bytes`.
pub fn sort_by_size(mut entries: Vec<DirectoryEntry>, order: SortOrder) -> Vec<DirectoryEntry> {
    // slice::sort_by_key is stable.
    match order {
        SortOrder::Ascending => entries.sort_by_key(|e| e.size_bytes),
        SortOrder::Descending => entries.sort_by_key(|e| std::cmp::Reverse(e.size_bytes)),
    }
    entries
}
