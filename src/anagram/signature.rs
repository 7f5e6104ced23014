//! Canonical character-frequency signature of a word.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Per-character occurrence counts, ordered by character.
///
/// Two words are anagrams iff their signatures are equal. No normalization
/// is applied: case and whitespace are significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Signature(Vec<(char, usize)>);

impl Signature {
    /// Count each distinct character of `word`, scanning left to right.
    pub fn of(word: &str) -> Self {
        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        for c in word.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        Signature(counts.into_iter().collect())
    }

    /// Occurrences of `c`; zero when absent.
    pub fn count(&self, c: char) -> usize {
        self.0
            .binary_search_by_key(&c, |(k, _)| *k)
            .map(|i| self.0[i].1)
            .unwrap_or(0)
    }

    /// Total number of characters the signature was built from.
    pub fn len(&self) -> usize {
        self.0.iter().map(|(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (c, n)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", c, n)?;
        }
        f.write_str("}")
    }
}
