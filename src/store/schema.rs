// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Table definitions. Every statement is idempotent so the bootstrap can run
//! on each open.

pub const WORD_COUNT_TABLE: &str = "word_count";
pub const LETTER_STATISTICS_TABLE: &str = "letter_statistics";
pub const CITIES_TABLE: &str = "cities";

pub const CREATE_STATISTICS_TABLES: &str = "
CREATE TABLE IF NOT EXISTS word_count (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word TEXT NOT NULL,
    count INTEGER NOT NULL,
    UNIQUE(word)
);

CREATE TABLE IF NOT EXISTS letter_statistics (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    letter TEXT NOT NULL,
    count_all INTEGER NOT NULL,
    count_uppercase INTEGER NOT NULL,
    percentage_uppercase REAL NOT NULL,
    UNIQUE(letter)
);
";

pub const CREATE_CITIES_TABLE: &str = "
CREATE TABLE IF NOT EXISTS cities (
    city_name TEXT PRIMARY KEY,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL
);
";

pub const INSERT_WORD_COUNT: &str =
    "INSERT OR IGNORE INTO word_count (word, count) VALUES (?1, ?2)";

pub const INSERT_LETTER_STATISTICS: &str = "INSERT OR IGNORE INTO letter_statistics \
     (letter, count_all, count_uppercase, percentage_uppercase) VALUES (?1, ?2, ?3, ?4)";

pub const UPSERT_CITY: &str =
    "INSERT OR REPLACE INTO cities (city_name, latitude, longitude) VALUES (?1, ?2, ?3)";
