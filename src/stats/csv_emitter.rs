// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Deterministic CSV rendering of word and letter tallies.
//!
//! Rows are comma-delimited with a mandatory header and `\n` line endings.
//! Normalized words never contain ASCII punctuation and letters are single
//! alphabetic characters, so no field ever needs quoting.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::letter_tally::LetterStatistics;
use super::word_tally::WordCount;
use crate::observability::messages::stats::OutputDirectoryCreated;
use crate::observability::messages::StructuredLog;

pub const WORD_COUNT_HEADER: &str = "Word,Count";
pub const LETTER_STATISTICS_HEADER: &str =
    "Letter,Count_All,Count_Uppercase,Percentage_Uppercase";

/// Shortest round-trip decimal, always with a fractional part (`0.0`, `50.0`).
pub fn format_percentage(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

pub fn render_word_count<W: Write>(words: &WordCount, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", WORD_COUNT_HEADER)?;
    for (word, count) in words {
        writeln!(out, "{},{}", word, count)?;
    }
    Ok(())
}

pub fn render_letter_statistics<W: Write>(
    stats: &LetterStatistics,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", LETTER_STATISTICS_HEADER)?;
    for (letter, count) in stats {
        writeln!(
            out,
            "{},{},{},{}",
            letter,
            count.all,
            count.uppercase,
            format_percentage(count.percentage_uppercase())
        )?;
    }
    Ok(())
}

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
            OutputDirectoryCreated {
                path: &parent.display().to_string(),
            }
            .log();
        }
    }
    Ok(())
}

fn write_file<F>(path: &Path, render: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    ensure_parent_dir(path)?;
    // File::create truncates, so a previous run's output is fully replaced.
    let mut out = BufWriter::new(File::create(path)?);
    render(&mut out)?;
    out.flush()
}

pub fn write_word_count(words: &WordCount, path: &Path) -> io::Result<()> {
    write_file(path, |out| render_word_count(words, out))
}

pub fn write_letter_statistics(stats: &LetterStatistics, path: &Path) -> io::Result<()> {
    write_file(path, |out| render_letter_statistics(stats, out))
}
