// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::Path;

use super::csv_emitter::{write_letter_statistics, write_word_count};
use super::letter_tally::LetterStatistics;
use super::word_tally::WordCount;
use crate::errors::StatsError;
use crate::ingest::JobDescriptor;
use crate::observability::messages::stats::{CsvFilesWritten, ProcessingInput};
use crate::observability::messages::StructuredLog;
use crate::store::StatisticsSink;

/// Everything one job produced.
#[derive(Debug, Clone)]
pub struct StatisticsReport {
    pub job: JobDescriptor,
    pub words: WordCount,
    pub letters: LetterStatistics,
    /// Rows newly written to the sink; keys already present are not counted
    pub words_inserted: usize,
    pub letters_inserted: usize,
}

impl StatisticsReport {
    pub fn word_count_csv(&self) -> &Path {
        &self.job.word_count_csv
    }

    pub fn letter_count_csv(&self) -> &Path {
        &self.job.letter_count_csv
    }
}

/// Compute word and letter statistics for one job, write both CSV files and
/// hand the same statistics to `sink` when one is given.
///
/// A missing input file is reported as [`StatsError::MissingInputFile`] before
/// anything is read or written.
pub fn run_job(
    job: &JobDescriptor,
    sink: Option<&mut (dyn StatisticsSink + '_)>,
) -> Result<StatisticsReport, StatsError> {
    if !job.input_file.exists() {
        return Err(StatsError::MissingInputFile(job.input_file.clone()));
    }

    ProcessingInput {
        input_file: &job.input_file.display().to_string(),
    }
    .log();

    let text = fs::read_to_string(&job.input_file)
        .map_err(|e| StatsError::io(&job.input_file, e))?;

    let words = WordCount::from_text(&text);
    write_word_count(&words, &job.word_count_csv)
        .map_err(|e| StatsError::io(&job.word_count_csv, e))?;

    let letters = LetterStatistics::from_text(&text);
    write_letter_statistics(&letters, &job.letter_count_csv)
        .map_err(|e| StatsError::io(&job.letter_count_csv, e))?;

    CsvFilesWritten {
        word_count_csv: &job.word_count_csv.display().to_string(),
        letter_count_csv: &job.letter_count_csv.display().to_string(),
        distinct_words: words.len(),
        total_letters: letters.total_letters(),
    }
    .log();

    let mut words_inserted = 0;
    let mut letters_inserted = 0;
    if let Some(sink) = sink {
        for (word, count) in &words {
            if sink.record_word(word, *count)? {
                words_inserted += 1;
            }
        }
        for (letter, count) in &letters {
            if sink.record_letter(*letter, count)? {
                letters_inserted += 1;
            }
        }
    }

    Ok(StatisticsReport {
        job: job.clone(),
        words,
        letters,
        words_inserted,
        letters_inserted,
    })
}
