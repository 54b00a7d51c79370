// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::io::{self, BufRead};

use super::normalizer::tokenize;

/// Word histogram keyed by normalized word.
///
/// Keys are kept in a `BTreeMap` so iteration is always in ascending
/// lexicographic order, which is what the CSV output needs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCount {
    counts: BTreeMap<String, u64>,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and tokenize a line, counting each token.
    pub fn add_line(&mut self, line: &str) {
        for word in tokenize(line) {
            *self.counts.entry(word).or_insert(0) += 1;
        }
    }

    pub fn from_text(text: &str) -> Self {
        let mut tally = Self::new();
        for line in text.lines() {
            tally.add_line(line);
        }
        tally
    }

    /// Consume a whole stream; the tally is only returned once the reader is exhausted.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut tally = Self::new();
        for line in reader.lines() {
            tally.add_line(&line?);
        }
        Ok(tally)
    }

    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of every word's count, i.e. the number of tokens seen
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, u64> {
        self.counts.iter()
    }
}

impl<'a> IntoIterator for &'a WordCount {
    type Item = (&'a String, &'a u64);
    type IntoIter = btree_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
