// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for statistics computation and CSV output.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Statistics computation started for one input file.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use feedstats::observability::messages::stats::ProcessingInput;
///
/// let msg = ProcessingInput {
///     input_file: "data/input.txt",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ProcessingInput<'a> {
    pub input_file: &'a str,
}

impl Display for ProcessingInput<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Processing file: {}", self.input_file)
    }
}

impl StructuredLog for ProcessingInput<'_> {
    fn log(&self) {
        tracing::info!(input_file = self.input_file, "{}", self);
    }
}

/// Both CSV files were written.
///
/// # Log Level
/// `info!` - Important operational event
pub struct CsvFilesWritten<'a> {
    pub word_count_csv: &'a str,
    pub letter_count_csv: &'a str,
    pub distinct_words: usize,
    pub total_letters: u64,
}

impl Display for CsvFilesWritten<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Files created: {} ({} words), {} ({} letters)",
            self.word_count_csv, self.distinct_words, self.letter_count_csv, self.total_letters
        )
    }
}

impl StructuredLog for CsvFilesWritten<'_> {
    fn log(&self) {
        tracing::info!(
            word_count_csv = self.word_count_csv,
            letter_count_csv = self.letter_count_csv,
            distinct_words = self.distinct_words,
            total_letters = self.total_letters,
            "{}",
            self
        );
    }
}

/// Output directory was created before writing.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct OutputDirectoryCreated<'a> {
    pub path: &'a str,
}

impl Display for OutputDirectoryCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Creating missing folder: {}", self.path)
    }
}

impl StructuredLog for OutputDirectoryCreated<'_> {
    fn log(&self) {
        tracing::debug!(path = self.path, "{}", self);
    }
}
