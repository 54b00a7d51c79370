// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::record::Record;
use crate::observability::messages::feed::FeedSaved;
use crate::observability::messages::StructuredLog;
use crate::stats::csv_emitter::ensure_parent_dir;

/// Records waiting to be appended to the feed file.
#[derive(Debug)]
pub struct NewsFeed {
    path: PathBuf,
    pending: Vec<Record>,
}

impl NewsFeed {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            pending: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn add_record(&mut self, record: Record) {
        self.pending.push(record);
    }

    pub fn pending(&self) -> &[Record] {
        &self.pending
    }

    /// Append every pending record to the feed file and clear the buffer.
    ///
    /// Returns how many records were written. On error the buffer is kept.
    pub fn save_to_file(&mut self) -> io::Result<usize> {
        ensure_parent_dir(&self.path)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut out = BufWriter::new(file);
        for record in &self.pending {
            writeln!(out, "{}", record.render())?;
        }
        out.flush()?;

        let written = self.pending.len();
        self.pending.clear();
        FeedSaved {
            path: &self.path.display().to_string(),
            record_count: written,
        }
        .log();
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use tempfile::TempDir;

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-05-01 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_save_appends_and_clears() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feeds/news.txt");
        let mut feed = NewsFeed::new(&path);

        feed.add_record(Record::news("First", "Lviv", now()));
        assert_eq!(feed.save_to_file().unwrap(), 1);
        assert!(feed.pending().is_empty());

        feed.add_record(Record::quote("Second", "Someone", now()));
        feed.save_to_file().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let first = Record::news("First", "Lviv", now()).render();
        let second = Record::quote("Second", "Someone", now()).render();
        assert_eq!(content, format!("{}\n{}\n", first, second));
    }

    #[test]
    fn test_empty_save_creates_file() {
        let dir = TempDir::new().unwrap();
        let mut feed = NewsFeed::new(dir.path().join("news.txt"));

        assert_eq!(feed.save_to_file().unwrap(), 0);
        assert!(feed.path().exists());
    }
}
