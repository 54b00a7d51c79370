// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Flat `;`-delimited feed documents.
//!
//! ```text
//! news;City council meets today;Odesa
//! privatead;Selling a piano;2025-01-31
//! quote;Stay hungry;Steve Jobs
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::Path;

use super::news_feed::NewsFeed;
use super::record::{Record, DATE_FORMAT};
use crate::errors::IngestError;
use crate::observability::messages::feed::UnknownRecordType;
use crate::observability::messages::ingest::{DocumentReading, DocumentRemoved, RecordSkipped};
use crate::observability::messages::StructuredLog;

/// How one flat line was interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Record(Record),
    Blank,
    UnknownTag(String),
    /// Known tag, unusable fields
    Malformed(String),
}

fn two_fields<'a>(tag: &str, fields: &[&'a str]) -> Result<(&'a str, &'a str), String> {
    match fields {
        [first, second, ..] => Ok(((*first).trim(), (*second).trim())),
        _ => Err(format!("'{}' record needs two fields after the tag", tag)),
    }
}

/// Interpret one line of a flat document.
pub fn parse_line(line: &str, now: NaiveDateTime) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }

    let fields: Vec<&str> = line.split(';').collect();
    let tag = fields[0].trim().to_lowercase();
    let rest = &fields[1..];

    let parsed = match tag.as_str() {
        "news" => two_fields(&tag, rest).map(|(text, city)| Record::news(text, city, now)),
        "privatead" => two_fields(&tag, rest).and_then(|(text, expires)| {
            NaiveDate::parse_from_str(expires, DATE_FORMAT)
                .map(|expires_on| Record::private_ad(text, expires_on, now))
                .map_err(|_| {
                    format!(
                        "invalid expiration date '{}', expected YYYY-MM-DD",
                        expires
                    )
                })
        }),
        "quote" => two_fields(&tag, rest).map(|(text, author)| Record::quote(text, author, now)),
        _ => return LineOutcome::UnknownTag(tag),
    };

    match parsed {
        Ok(record) => LineOutcome::Record(record),
        Err(reason) => LineOutcome::Malformed(reason),
    }
}

/// Counts from one flat document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlatSummary {
    pub records_added: usize,
    pub lines_skipped: usize,
}

/// Loads flat documents into a [`NewsFeed`], consuming each document once.
pub struct FlatFeedIngestor<'a> {
    feed: &'a mut NewsFeed,
}

impl<'a> FlatFeedIngestor<'a> {
    pub fn new(feed: &'a mut NewsFeed) -> Self {
        Self { feed }
    }

    /// Parse every line, save the feed, then delete the document.
    ///
    /// Unknown tags and malformed lines are skipped with a warning. The
    /// document is only removed once the feed has been saved.
    pub fn process_file(
        &mut self,
        path: &Path,
        now: NaiveDateTime,
    ) -> Result<FlatSummary, IngestError> {
        if !path.exists() {
            return Err(IngestError::MissingDocument(path.to_path_buf()));
        }

        let document_name = path.display().to_string();
        DocumentReading {
            format: "flat",
            path: &document_name,
        }
        .log();

        let content = fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
        let mut summary = FlatSummary::default();

        for (index, line) in content.lines().enumerate() {
            match parse_line(line, now) {
                LineOutcome::Record(record) => {
                    self.feed.add_record(record);
                    summary.records_added += 1;
                }
                LineOutcome::Blank => {}
                LineOutcome::UnknownTag(tag) => {
                    UnknownRecordType {
                        tag: &tag,
                        line_number: index + 1,
                    }
                    .log();
                    summary.lines_skipped += 1;
                }
                LineOutcome::Malformed(reason) => {
                    RecordSkipped {
                        document: &document_name,
                        index,
                        reason: &reason,
                    }
                    .log();
                    summary.lines_skipped += 1;
                }
            }
        }

        let feed_path = self.feed.path().to_path_buf();
        self.feed
            .save_to_file()
            .map_err(|e| IngestError::io(feed_path, e))?;

        fs::remove_file(path).map_err(|e| IngestError::io(path, e))?;
        DocumentRemoved {
            path: &document_name,
            jobs_processed: summary.records_added,
            records_skipped: summary.lines_skipped,
        }
        .log();

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-05-01 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_parse_each_kind() {
        assert_eq!(
            parse_line("news;Bridge reopened;Kyiv", now()),
            LineOutcome::Record(Record::news("Bridge reopened", "Kyiv", now()))
        );
        assert_eq!(
            parse_line("QUOTE;Stay hungry;Steve Jobs\n", now()),
            LineOutcome::Record(Record::quote("Stay hungry", "Steve Jobs", now()))
        );
        match parse_line("privatead;Piano;2024-05-03", now()) {
            LineOutcome::Record(Record::PrivateAd { days_left, .. }) => assert_eq!(days_left, 1),
            other => panic!("Expected a private ad, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_and_malformed_lines() {
        assert_eq!(
            parse_line("weather;Sunny;Kyiv", now()),
            LineOutcome::UnknownTag("weather".to_string())
        );
        assert!(matches!(parse_line("news;only text", now()), LineOutcome::Malformed(_)));
        assert!(matches!(
            parse_line("privatead;Piano;next tuesday", now()),
            LineOutcome::Malformed(_)
        ));
        assert_eq!(parse_line("   ", now()), LineOutcome::Blank);
    }

    #[test]
    fn test_process_file_consumes_document() {
        let dir = TempDir::new().unwrap();
        let document = dir.path().join("feed-input.txt");
        fs::write(
            &document,
            "news;Bridge reopened;Kyiv\nweather;Sunny;Kyiv\n\nquote;Stay hungry;Steve Jobs\nnews;broken\n",
        )
        .unwrap();
        let mut feed = NewsFeed::new(dir.path().join("feed.txt"));

        let summary = FlatFeedIngestor::new(&mut feed)
            .process_file(&document, now())
            .unwrap();

        assert_eq!(
            summary,
            FlatSummary {
                records_added: 2,
                lines_skipped: 2
            }
        );
        assert!(!document.exists());
        let content = fs::read_to_string(dir.path().join("feed.txt")).unwrap();
        assert!(content.starts_with("News:\nBridge reopened\nCity: Kyiv\n"));
        assert!(content.contains("\"Stay hungry\" - Steve Jobs"));
    }

    #[test]
    fn test_missing_document() {
        let dir = TempDir::new().unwrap();
        let mut feed = NewsFeed::new(dir.path().join("feed.txt"));

        let result = FlatFeedIngestor::new(&mut feed).process_file(&dir.path().join("none.txt"), now());
        assert!(matches!(result, Err(IngestError::MissingDocument(_))));
    }

    #[test]
    fn test_feed_failure_keeps_document() {
        let dir = TempDir::new().unwrap();
        let document = dir.path().join("feed-input.txt");
        fs::write(&document, "news;Text;City\n").unwrap();
        // The feed path is a directory, so appending to it fails.
        let feed_dir = dir.path().join("feed.txt");
        fs::create_dir(&feed_dir).unwrap();
        let mut feed = NewsFeed::new(&feed_dir);

        let result = FlatFeedIngestor::new(&mut feed).process_file(&document, now());
        assert!(matches!(result, Err(IngestError::Io { .. })));
        assert!(document.exists());
    }
}
