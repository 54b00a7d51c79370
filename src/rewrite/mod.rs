// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sentence-level clean-up of free text.
//!
//! The steps run in a fixed order in [`rewrite`]: sentence casing, `iz`
//! correction, quote spacing, a closing sentence built from the last word of
//! every sentence, and capitalization of the third sentence.

use regex::Regex;
use std::sync::OnceLock;

/// Result of [`rewrite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenText {
    pub text: String,
    /// Whitespace characters in the text before rewriting
    pub whitespace_count: usize,
}

static LINE_OR_SENTENCE_BREAK: OnceLock<Regex> = OnceLock::new();
static SENTENCE_BREAK: OnceLock<Regex> = OnceLock::new();
static STANDALONE_IZ: OnceLock<Regex> = OnceLock::new();

fn line_or_sentence_break() -> &'static Regex {
    LINE_OR_SENTENCE_BREAK.get_or_init(|| Regex::new(r"[.\n]\s+").expect("valid break pattern"))
}

fn sentence_break() -> &'static Regex {
    SENTENCE_BREAK.get_or_init(|| Regex::new(r"[.!?]\s+").expect("valid break pattern"))
}

fn standalone_iz() -> &'static Regex {
    STANDALONE_IZ.get_or_init(|| Regex::new(r"\b[Ii][Zz]\b").expect("valid iz pattern"))
}

/// Split `text` at every match of `pattern`, a terminator followed by
/// whitespace. The terminator stays with its sentence; the whitespace is dropped.
fn split_after<'t>(text: &'t str, pattern: &Regex) -> Vec<&'t str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for found in pattern.find_iter(text) {
        let terminator_len = text[found.start()..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        pieces.push(&text[start..found.start() + terminator_len]);
        start = found.end();
    }
    pieces.push(&text[start..]);
    pieces
}

/// First character uppercased, the rest lowercased.
fn sentence_case(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn capitalize_first(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Sentence-case every sentence (split after `.` or a newline) and join them with spaces.
pub fn normalize_cases(text: &str) -> String {
    split_after(text.trim(), line_or_sentence_break())
        .into_iter()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(sentence_case)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replace the standalone word `iz`, in any case, with `is`.
pub fn fix_iz(text: &str) -> String {
    standalone_iz().replace_all(text, "is").into_owned()
}

/// Insert the missing space in `Fix“`.
pub fn fix_quote_spacing(text: &str) -> String {
    text.replace("Fix“", "Fix “")
}

/// Append a sentence made of the last word of every existing sentence.
pub fn append_last_words_sentence(text: &str) -> String {
    let last_words: Vec<String> = split_after(text, sentence_break())
        .into_iter()
        .filter(|sentence| !sentence.trim().is_empty())
        .filter_map(|sentence| sentence.split_whitespace().last())
        .map(|word| sentence_case(word.trim_matches('.')))
        .collect();

    format!("{} {}.", text, last_words.join(" "))
}

/// Make sure the third sentence starts with a capital letter.
pub fn capitalize_third_sentence(text: &str) -> String {
    split_after(text, sentence_break())
        .into_iter()
        .map(str::trim)
        .enumerate()
        .map(|(i, sentence)| {
            if i == 2 {
                capitalize_first(sentence)
            } else {
                sentence.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn count_whitespace(text: &str) -> usize {
    text.chars().filter(|c| c.is_whitespace()).count()
}

/// Run every clean-up step over `text`.
pub fn rewrite(text: &str) -> RewrittenText {
    let normalized = normalize_cases(text);
    let fixed = fix_quote_spacing(&fix_iz(&normalized));
    let extended = append_last_words_sentence(&fixed);

    RewrittenText {
        text: capitalize_third_sentence(&extended),
        whitespace_count: count_whitespace(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_after_keeps_terminator() {
        assert_eq!(
            split_after("one. two.\n\nthree", line_or_sentence_break()),
            vec!["one.", "two.", "three"]
        );
        // Whitespace after a plain word does not split.
        assert_eq!(
            split_after("head: \nbody", line_or_sentence_break()),
            vec!["head: \nbody"]
        );
        assert_eq!(split_after("a\n  b", line_or_sentence_break()), vec!["a\n", "b"]);
        assert_eq!(split_after("a\n\nb", line_or_sentence_break()), vec!["a\n", "b"]);
        assert_eq!(split_after("a.\n b", line_or_sentence_break()), vec!["a.", "b"]);
        assert_eq!(
            split_after("Done! Really? Yes.", sentence_break()),
            vec!["Done!", "Really?", "Yes."]
        );
    }

    #[test]
    fn test_normalize_cases() {
        assert_eq!(
            normalize_cases("  hello WORLD. this IS fine.\nnext LINE  "),
            "Hello world. This is fine. Next line"
        );
    }

    #[test]
    fn test_fix_iz_only_whole_words() {
        assert_eq!(
            fix_iz("iz it? It iZ. Izzy isn't fizz, IZ"),
            "is it? It is. Izzy isn't fizz, is"
        );
        assert_eq!(fix_iz("fix“iZ”"), "fix“is”");
    }

    #[test]
    fn test_fix_quote_spacing() {
        assert_eq!(fix_quote_spacing("Fix“is”"), "Fix “is”");
    }

    #[test]
    fn test_append_last_words_sentence() {
        assert_eq!(
            append_last_words_sentence("One two. Three four! Five"),
            "One two. Three four! Five Two Four! Five."
        );
    }

    #[test]
    fn test_capitalize_third_sentence() {
        assert_eq!(
            capitalize_third_sentence("a b. c d. e f. g"),
            "a b. c d. E f. g"
        );
        assert_eq!(capitalize_third_sentence("only one."), "only one.");
    }

    #[test]
    fn test_count_whitespace_counts_all_kinds() {
        assert_eq!(count_whitespace(" a\tb\nc \r\n"), 6);
    }

    #[test]
    fn test_rewrite_chains_steps() {
        let result = rewrite("tHis iz A test. aNOTHER one.");
        assert_eq!(
            result.text,
            "This is a test. Another one. Test One."
        );
        assert_eq!(result.whitespace_count, 5);
    }
}
