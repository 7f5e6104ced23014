//! Enumerating unordered pairs within each signature group.

use crate::anagram::index::SignatureGroup;
use serde::Serialize;
use std::fmt;

/// Two word occurrences from the same group, in group order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnagramPair<'a> {
    pub first: &'a str,
    pub second: &'a str,
}

impl fmt::Display for AnagramPair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.second)
    }
}

/// Lazy iterator over every `(i, j)` with `i < j` of every group with two or more words.
///
/// All pairs of one group are yielded before the next group starts.
pub struct Pairs<'g, 'a> {
    groups: &'g [SignatureGroup<'a>],
    group: usize,
    i: usize,
    j: usize,
}

impl<'g, 'a> Pairs<'g, 'a> {
    pub(crate) fn new(groups: &'g [SignatureGroup<'a>]) -> Self {
        Self {
            groups,
            group: 0,
            i: 0,
            j: 1,
        }
    }
}

impl<'g, 'a> Iterator for Pairs<'g, 'a> {
    type Item = AnagramPair<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(group) = self.groups.get(self.group) {
            let words = &group.words;
            if self.j < words.len() {
                let pair = AnagramPair {
                    first: words[self.i],
                    second: words[self.j],
                };
                self.j += 1;
                if self.j == words.len() {
                    self.i += 1;
                    self.j = self.i + 1;
                }
                return Some(pair);
            }
            // Exhausted, or a singleton/empty group.
            self.group += 1;
            self.i = 0;
            self.j = 1;
        }
        None
    }
}
