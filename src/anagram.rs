//! Anagram pair finding.
//!
//! Words are bucketed by a canonical character-frequency signature; every
//! bucket holding two or more words yields all of its unordered pairs.

pub mod index;
pub mod pairs;
pub mod report;
pub mod signature;
pub mod words;

pub use index::{SignatureGroup, SignatureGroups};
pub use pairs::{AnagramPair, Pairs};
pub use report::report;
pub use signature::Signature;
pub use words::BUILTIN_WORDS;

/// Group `words` and collect every anagram pair in group order.
pub fn find_pairs<S: AsRef<str>>(words: &[S]) -> Vec<(String, String)> {
    let groups = SignatureGroups::index(words);
    groups
        .pairs()
        .map(|pair| (pair.first.to_string(), pair.second.to_string()))
        .collect()
}
