// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::io::{self, BufRead};

/// `part / whole × 100`, or 0 when `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Occurrences of one case-folded letter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LetterCount {
    /// Every occurrence, regardless of case
    pub all: u64,
    /// Occurrences written in uppercase
    pub uppercase: u64,
}

impl LetterCount {
    pub fn percentage_uppercase(&self) -> f64 {
        percentage(self.uppercase, self.all)
    }
}

/// Letter statistics for a text.
///
/// Letters are keyed by their lowercase form. Each key tracks its total and
/// its own uppercase occurrences, alongside grand totals for the whole text.
/// Only alphabetic characters are counted; digits, punctuation and whitespace
/// are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LetterStatistics {
    letters: BTreeMap<char, LetterCount>,
    total_letters: u64,
    total_uppercase: u64,
}

impl LetterStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `text` character by character.
    pub fn add_text(&mut self, text: &str) {
        for c in text.chars().filter(|c| c.is_alphabetic()) {
            let is_upper = c.is_uppercase();
            // Multi-char lowercase mappings keep only their leading char.
            let folded = c.to_lowercase().next().unwrap_or(c);

            self.total_letters += 1;
            let entry = self.letters.entry(folded).or_default();
            entry.all += 1;
            if is_upper {
                self.total_uppercase += 1;
                entry.uppercase += 1;
            }
        }
    }

    pub fn from_text(text: &str) -> Self {
        let mut stats = Self::new();
        stats.add_text(text);
        stats
    }

    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut stats = Self::new();
        for line in reader.lines() {
            stats.add_text(&line?);
        }
        Ok(stats)
    }

    pub fn get(&self, letter: char) -> Option<&LetterCount> {
        self.letters.get(&letter)
    }

    pub fn total_letters(&self) -> u64 {
        self.total_letters
    }

    pub fn total_uppercase(&self) -> u64 {
        self.total_uppercase
    }

    pub fn uppercase_percentage(&self) -> f64 {
        percentage(self.total_uppercase, self.total_letters)
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, char, LetterCount> {
        self.letters.iter()
    }
}

impl<'a> IntoIterator for &'a LetterStatistics {
    type Item = (&'a char, &'a LetterCount);
    type IntoIter = btree_map::Iter<'a, char, LetterCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_the_the_the_cat() {
        let stats = LetterStatistics::from_text("The the THE cat.");

        assert_eq!(stats.get('t').map(|c| c.all), Some(4));
        assert_eq!(stats.get('h').map(|c| c.all), Some(3));
        assert_eq!(stats.get('e').map(|c| c.all), Some(3));
        assert_eq!(stats.get('c').map(|c| c.all), Some(1));
        assert_eq!(stats.get('a').map(|c| c.all), Some(1));
        assert_eq!(stats.total_letters(), 12);
        assert_eq!(stats.total_uppercase(), 4);
        assert!((stats.uppercase_percentage() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_per_letter_uppercase_is_tracked() {
        let stats = LetterStatistics::from_text("The the THE cat.");

        let t = stats.get('t').copied().unwrap();
        assert_eq!(t, LetterCount { all: 4, uppercase: 2 });
        assert_eq!(t.percentage_uppercase(), 50.0);
        assert_eq!(stats.get('c').unwrap().uppercase, 0);
        assert_eq!(stats.get('c').unwrap().percentage_uppercase(), 0.0);
    }

    #[test]
    fn test_sum_of_letters_matches_alphabetic_count() {
        let text = "Grüße aus Köln, 2024! ÀÉÎ õ\t42";
        let stats = LetterStatistics::from_text(text);
        let per_letter: u64 = stats.iter().map(|(_, count)| count.all).sum();
        let alphabetic = text.chars().filter(|c| c.is_alphabetic()).count() as u64;

        assert_eq!(per_letter, alphabetic);
        assert_eq!(stats.total_letters(), alphabetic);
    }

    #[test]
    fn test_keys_are_lowercase_only() {
        let stats = LetterStatistics::from_text("AbC");
        let keys: Vec<char> = stats.iter().map(|(letter, _)| *letter).collect();
        assert_eq!(keys, vec!['a', 'b', 'c']);
        assert!(stats.get('A').is_none());
    }

    #[test]
    fn test_empty_text_has_zero_percentage() {
        let stats = LetterStatistics::from_text("1234 ... \n");
        assert!(stats.is_empty());
        assert_eq!(stats.total_letters(), 0);
        assert_eq!(stats.uppercase_percentage(), 0.0);
    }

    #[test]
    fn test_percentage_zero_denominator() {
        assert_eq!(percentage(5, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }
}
