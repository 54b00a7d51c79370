// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Lowercase a line, drop every ASCII punctuation character and trim it.
pub fn normalize_line(line: &str) -> String {
    line.to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Split a normalized line into word tokens on whitespace runs.
pub fn tokenize(line: &str) -> Vec<String> {
    normalize_line(line)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
