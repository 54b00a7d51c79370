// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod schema;
pub mod statistics;

pub use statistics::SqliteStatisticsStore;

use crate::errors::StoreError;
use crate::stats::LetterCount;

/// Destination for computed statistics.
///
/// Writes are insert-if-absent: a key that is already recorded keeps its
/// first value. Both methods return whether a new row was written; an
/// existing key is not an error.
pub trait StatisticsSink {
    fn record_word(&mut self, word: &str, count: u64) -> Result<bool, StoreError>;

    fn record_letter(&mut self, letter: char, count: &LetterCount) -> Result<bool, StoreError>;
}

/// In-memory sink with the same first-writer-wins rule as the SQLite store.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStatisticsSink {
    pub words: std::collections::BTreeMap<String, u64>,
    pub letters: std::collections::BTreeMap<char, LetterCount>,
}

#[cfg(test)]
impl StatisticsSink for MemoryStatisticsSink {
    fn record_word(&mut self, word: &str, count: u64) -> Result<bool, StoreError> {
        if self.words.contains_key(word) {
            return Ok(false);
        }
        self.words.insert(word.to_string(), count);
        Ok(true)
    }

    fn record_letter(&mut self, letter: char, count: &LetterCount) -> Result<bool, StoreError> {
        if self.letters.contains_key(&letter) {
            return Ok(false);
        }
        self.letters.insert(letter, *count);
        Ok(true)
    }
}
