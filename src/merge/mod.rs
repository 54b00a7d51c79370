// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Merging a list of string-keyed dictionaries into one.

use rand::Rng;
use std::collections::BTreeMap;

pub type Dict = BTreeMap<String, i64>;

const MIN_DICTS: usize = 2;
const MAX_DICTS: usize = 10;
/// Upper bound on key draws per dictionary; one per letter of the alphabet
const MAX_KEY_DRAWS: usize = 26;
const MAX_VALUE: i64 = 100;

/// Build 2 to 10 dictionaries of random single-letter keys and values 0 to 100.
///
/// Each dictionary draws 1 to 26 keys from `a`..=`z` with replacement, so a
/// repeated letter keeps its last value and the dictionary can end up smaller.
pub fn generate_random_dicts<R: Rng>(rng: &mut R) -> Vec<Dict> {
    let dict_count = rng.gen_range(MIN_DICTS..=MAX_DICTS);
    let mut dicts = Vec::with_capacity(dict_count);
    for _ in 0..dict_count {
        let draws = rng.gen_range(1..=MAX_KEY_DRAWS);
        let mut dict = Dict::new();
        for _ in 0..draws {
            let letter = char::from(b'a' + rng.gen_range(0..26u8));
            dict.insert(letter.to_string(), rng.gen_range(0..=MAX_VALUE));
        }
        dicts.push(dict);
    }
    dicts
}

/// Winning value for a key and the 1-based index of the dictionary it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub value: i64,
    pub dict_index: usize,
}

/// Keep the maximum value per key. Ties keep the earliest dictionary.
pub fn merge_with_origin(dicts: &[Dict]) -> BTreeMap<String, Origin> {
    let mut merged: BTreeMap<String, Origin> = BTreeMap::new();
    for (position, dict) in dicts.iter().enumerate() {
        let dict_index = position + 1;
        for (key, &value) in dict {
            match merged.get_mut(key) {
                Some(existing) if value > existing.value => {
                    *existing = Origin { value, dict_index };
                }
                Some(_) => {}
                None => {
                    merged.insert(key.clone(), Origin { value, dict_index });
                }
            }
        }
    }
    merged
}

/// Suffix `_{index}` to keys that appear in more than one dictionary.
pub fn rename_duplicate_keys(merged: &BTreeMap<String, Origin>, dicts: &[Dict]) -> Dict {
    merged
        .iter()
        .map(|(key, origin)| {
            let occurrences = dicts.iter().filter(|dict| dict.contains_key(key)).count();
            let name = if occurrences > 1 {
                format!("{}_{}", key, origin.dict_index)
            } else {
                key.clone()
            };
            (name, origin.value)
        })
        .collect()
}

pub fn merge_dicts(dicts: &[Dict]) -> Dict {
    rename_duplicate_keys(&merge_with_origin(dicts), dicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dict(pairs: &[(&str, i64)]) -> Dict {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_merge_dicts() {
        let dicts = vec![
            dict(&[("a", 5), ("b", 7)]),
            dict(&[("a", 3), ("c", 35), ("g", 42)]),
            dict(&[("a", 10), ("b", 2), ("x", 50)]),
        ];

        let expected = dict(&[("a_3", 10), ("b_1", 7), ("c", 35), ("g", 42), ("x", 50)]);
        assert_eq!(merge_dicts(&dicts), expected);
    }

    #[test]
    fn test_ties_keep_first_dictionary() {
        let dicts = vec![dict(&[("k", 4)]), dict(&[("k", 4)])];
        let merged = merge_with_origin(&dicts);
        assert_eq!(merged["k"], Origin { value: 4, dict_index: 1 });
        assert_eq!(merge_dicts(&dicts), dict(&[("k_1", 4)]));
    }

    #[test]
    fn test_generated_dicts_stay_in_bounds() {
        for seed in 0..50 {
            let dicts = generate_random_dicts(&mut StdRng::seed_from_u64(seed));

            assert!((MIN_DICTS..=MAX_DICTS).contains(&dicts.len()));
            for dict in &dicts {
                assert!((1..=MAX_KEY_DRAWS).contains(&dict.len()));
                for (key, value) in dict {
                    assert_eq!(key.len(), 1);
                    assert!(key.chars().all(|c| c.is_ascii_lowercase()));
                    assert!((0..=MAX_VALUE).contains(value));
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_dicts() {
        let first = generate_random_dicts(&mut StdRng::seed_from_u64(7));
        let second = generate_random_dicts(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_merging_generated_dicts_keeps_maximums() {
        for seed in 0..20 {
            let dicts = generate_random_dicts(&mut StdRng::seed_from_u64(seed));
            let merged = merge_with_origin(&dicts);

            for (key, origin) in &merged {
                let max = dicts.iter().filter_map(|d| d.get(key)).max().copied();
                assert_eq!(Some(origin.value), max);
                assert_eq!(dicts[origin.dict_index - 1].get(key), Some(&origin.value));
                // Earliest dictionary holding the maximum
                let first = dicts.iter().position(|d| d.get(key) == max.as_ref());
                assert_eq!(first, Some(origin.dict_index - 1));
            }

            let renamed = merge_dicts(&dicts);
            assert_eq!(renamed.len(), merged.len());
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_dicts(&[]).is_empty());
    }
}
