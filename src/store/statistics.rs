// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};

use super::schema::{
    CREATE_STATISTICS_TABLES, INSERT_LETTER_STATISTICS, INSERT_WORD_COUNT,
    LETTER_STATISTICS_TABLE, WORD_COUNT_TABLE,
};
use super::StatisticsSink;
use crate::errors::StoreError;
use crate::observability::messages::store::{DuplicateKeyIgnored, StoreClosed, StoreOpened};
use crate::observability::messages::StructuredLog;
use crate::stats::LetterCount;

/// Stored row of `letter_statistics`.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredLetter {
    pub count_all: u64,
    pub count_uppercase: u64,
    pub percentage_uppercase: f64,
}

/// SQLite store for word and letter statistics.
///
/// One connection for the lifetime of the value; every statement commits on
/// its own. Inserts never overwrite an existing key.
pub struct SqliteStatisticsStore {
    conn: Connection,
    path: PathBuf,
}

pub(crate) fn to_sql_int(value: u64) -> Result<i64, StoreError> {
    i64::try_from(value)
        .map_err(|e| StoreError::Sqlite(rusqlite::Error::ToSqlConversionFailure(Box::new(e))))
}

pub(crate) fn open_connection(path: &Path) -> Result<Connection, StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(Connection::open(path)?)
}

impl SqliteStatisticsStore {
    /// Open (or create) the database file and bootstrap its tables.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = open_connection(path)?;
        Self::bootstrap(conn, path.to_path_buf())
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::bootstrap(Connection::open_in_memory()?, PathBuf::from(":memory:"))
    }

    fn bootstrap(conn: Connection, path: PathBuf) -> Result<Self, StoreError> {
        conn.execute_batch(CREATE_STATISTICS_TABLES)?;
        StoreOpened {
            path: &path.display().to_string(),
        }
        .log();
        Ok(Self { conn, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn insert_word_count(&self, word: &str, count: u64) -> Result<bool, StoreError> {
        let changed = self
            .conn
            .execute(INSERT_WORD_COUNT, params![word, to_sql_int(count)?])?;
        if changed == 0 {
            DuplicateKeyIgnored {
                table: WORD_COUNT_TABLE,
                key: word,
            }
            .log();
        }
        Ok(changed > 0)
    }

    pub fn insert_letter_statistics(
        &self,
        letter: char,
        count: &LetterCount,
    ) -> Result<bool, StoreError> {
        let key = letter.to_string();
        let changed = self.conn.execute(
            INSERT_LETTER_STATISTICS,
            params![
                key,
                to_sql_int(count.all)?,
                to_sql_int(count.uppercase)?,
                count.percentage_uppercase()
            ],
        )?;
        if changed == 0 {
            DuplicateKeyIgnored {
                table: LETTER_STATISTICS_TABLE,
                key: &key,
            }
            .log();
        }
        Ok(changed > 0)
    }

    pub fn word_count(&self, word: &str) -> Result<Option<u64>, StoreError> {
        let count: Option<i64> = self
            .conn
            .query_row(
                "SELECT count FROM word_count WHERE word = ?1",
                params![word],
                |row| row.get(0),
            )
            .optional()?;
        Ok(count.map(|c| c.max(0) as u64))
    }

    pub fn letter_statistics(&self, letter: char) -> Result<Option<StoredLetter>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT count_all, count_uppercase, percentage_uppercase \
                 FROM letter_statistics WHERE letter = ?1",
                params![letter.to_string()],
                |row| {
                    Ok(StoredLetter {
                        count_all: row.get::<_, i64>(0)?.max(0) as u64,
                        count_uppercase: row.get::<_, i64>(1)?.max(0) as u64,
                        percentage_uppercase: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    /// Close the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<(), StoreError> {
        let path = self.path.display().to_string();
        self.conn.close().map_err(|(_, e)| StoreError::Sqlite(e))?;
        StoreClosed { path: &path }.log();
        Ok(())
    }
}

impl StatisticsSink for SqliteStatisticsStore {
    fn record_word(&mut self, word: &str, count: u64) -> Result<bool, StoreError> {
        self.insert_word_count(word, count)
    }

    fn record_letter(&mut self, letter: char, count: &LetterCount) -> Result<bool, StoreError> {
        self.insert_letter_statistics(letter, count)
    }
}
