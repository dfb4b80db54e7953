//! Word frequency table
//!
//! Corpus counts used by the rarity heuristic. Lower means rarer.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Mapping from word to corpus frequency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordFrequencies {
    counts: FxHashMap<String, u64>,
}

impl WordFrequencies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frequency of a word, if known
    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn insert(&mut self, word: impl Into<String>, count: u64) {
        self.counts.insert(word.into(), count);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Rarest of the given words that appear in the table
    ///
    /// Ties go to the word that comes first lexicographically, so the
    /// answer does not depend on the order of `words`.
    pub fn rarest<'w>(&self, words: impl IntoIterator<Item = &'w str>) -> Option<(&'w str, u64)> {
        words
            .into_iter()
            .filter_map(|word| self.get(word).map(|count| (word, count)))
            .min_by(|(a_word, a_count), (b_word, b_count)| {
                a_count.cmp(b_count).then_with(|| a_word.cmp(b_word))
            })
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for WordFrequencies {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            counts: iter
                .into_iter()
                .map(|(word, count)| (word.into(), count))
                .collect(),
        }
    }
}
