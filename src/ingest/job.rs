// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::path::PathBuf;

use crate::config::Config;

/// A job as written in a JSON object or an XML `record` element.
///
/// Every field is optional at this stage; [`JobDescriptor::from_record`]
/// enforces `input_file` and fills the defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct JobRecord {
    pub input_file: Option<String>,
    pub word_count_csv: Option<String>,
    pub letter_count_csv: Option<String>,
}

/// One statistics request with every path resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDescriptor {
    pub input_file: PathBuf,
    pub word_count_csv: PathBuf,
    pub letter_count_csv: PathBuf,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl JobDescriptor {
    /// The job for the configured default input and outputs.
    pub fn from_config(config: &Config) -> Self {
        Self {
            input_file: config.input_file(),
            word_count_csv: config.word_count_csv(),
            letter_count_csv: config.letter_count_csv(),
        }
    }

    /// Resolve a raw record against `config`.
    ///
    /// Relative paths are joined onto the data directory; absent outputs take
    /// the configured defaults. Fails with the skip reason when the record has
    /// no usable `input_file`.
    pub fn from_record(record: &JobRecord, config: &Config) -> Result<Self, String> {
        let input_file = non_blank(&record.input_file)
            .ok_or_else(|| "missing 'input_file'".to_string())?;

        Ok(Self {
            input_file: config.resolve(input_file),
            word_count_csv: non_blank(&record.word_count_csv)
                .map(|path| config.resolve(path))
                .unwrap_or_else(|| config.word_count_csv()),
            letter_count_csv: non_blank(&record.letter_count_csv)
                .map(|path| config.resolve(path))
                .unwrap_or_else(|| config.letter_count_csv()),
        })
    }
}
