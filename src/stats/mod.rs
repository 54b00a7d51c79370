// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod csv_emitter;
pub mod letter_tally;
pub mod normalizer;
pub mod pipeline;
pub mod word_tally;

pub use csv_emitter::{write_letter_statistics, write_word_count};
pub use letter_tally::{LetterCount, LetterStatistics};
pub use normalizer::{normalize_line, tokenize};
pub use pipeline::{run_job, StatisticsReport};
pub use word_tally::WordCount;
