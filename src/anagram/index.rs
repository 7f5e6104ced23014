//! Bucketing words by signature.

use crate::anagram::pairs::Pairs;
use crate::anagram::signature::Signature;
use std::collections::HashMap;
use tracing::debug;

/// Words sharing one signature, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureGroup<'a> {
    pub signature: Signature,
    pub words: Vec<&'a str>,
}

impl<'a> SignatureGroup<'a> {
    /// Number of unordered pairs this group contributes: C(k, 2).
    pub fn pair_count(&self) -> usize {
        let k = self.words.len();
        k * k.saturating_sub(1) / 2
    }
}

/// Immutable mapping from signature to its group, built in a single pass.
///
/// Groups are kept in order of each signature's first appearance so output
/// is reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct SignatureGroups<'a> {
    groups: Vec<SignatureGroup<'a>>,
    by_signature: HashMap<Signature, usize>,
}

impl<'a> SignatureGroups<'a> {
    /// Index every word by its signature. Duplicate words stay distinct entries.
    pub fn index<S: AsRef<str>>(words: &'a [S]) -> Self {
        let mut groups: Vec<SignatureGroup<'a>> = Vec::new();
        let mut by_signature: HashMap<Signature, usize> = HashMap::new();

        for word in words {
            let word = word.as_ref();
            let signature = Signature::of(word);
            match by_signature.get(&signature) {
                Some(&slot) => groups[slot].words.push(word),
                None => {
                    by_signature.insert(signature.clone(), groups.len());
                    groups.push(SignatureGroup {
                        signature,
                        words: vec![word],
                    });
                }
            }
        }

        debug!(
            words = words.len(),
            groups = groups.len(),
            "Indexed words by signature"
        );
        Self {
            groups,
            by_signature,
        }
    }

    pub fn get(&self, signature: &Signature) -> Option<&SignatureGroup<'a>> {
        self.by_signature.get(signature).map(|&slot| &self.groups[slot])
    }

    /// Group holding `word`, if it was indexed.
    pub fn group_of(&self, word: &str) -> Option<&SignatureGroup<'a>> {
        self.get(&Signature::of(word))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SignatureGroup<'a>> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every anagram pair, group by group.
    pub fn pairs(&self) -> Pairs<'_, 'a> {
        Pairs::new(&self.groups)
    }

    pub fn pair_count(&self) -> usize {
        self.groups.iter().map(SignatureGroup::pair_count).sum()
    }
}
