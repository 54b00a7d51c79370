// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Base directory for every relative path
pub const DEFAULT_DATA_DIR: &str = "data";
/// Text file analysed when no job document names one
pub const DEFAULT_INPUT_FILE: &str = "input.txt";
pub const DEFAULT_WORD_COUNT_CSV: &str = "word-count.csv";
pub const DEFAULT_LETTER_COUNT_CSV: &str = "letter-count.csv";
/// SQLite file holding word and letter statistics
pub const DEFAULT_DATABASE: &str = "records.db";
pub const DEFAULT_JSON_JOBS: &str = "input.json";
pub const DEFAULT_XML_JOBS: &str = "input.xml";
/// Feed file that published records are appended to
pub const DEFAULT_FEED_FILE: &str = "feed.txt";
/// Flat `;`-delimited document consumed by `feed ingest`
pub const DEFAULT_FEED_INPUT: &str = "feed-input.txt";
pub const DEFAULT_CITIES_DATABASE: &str = "city_coordinates.db";
