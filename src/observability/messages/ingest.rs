// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for job document ingestion.
//!
//! This module contains message types for logging events related to:
//! * Reading JSON, XML and flat documents
//! * Skipping malformed records
//! * Rejecting documents with an unusable shape
//! * Removing documents after successful processing

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Document reading started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use feedstats::observability::messages::ingest::DocumentReading;
///
/// let msg = DocumentReading {
///     format: "JSON",
///     path: "data/input.json",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct DocumentReading<'a> {
    pub format: &'a str,
    pub path: &'a str,
}

impl Display for DocumentReading<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Reading input {} file: {}", self.format, self.path)
    }
}

impl StructuredLog for DocumentReading<'_> {
    fn log(&self) {
        tracing::info!(format = self.format, path = self.path, "{}", self);
    }
}

/// A job document was not found and nothing was done.
///
/// # Log Level
/// `info!` - Normal when no jobs are queued
pub struct DocumentNotFound<'a> {
    pub path: &'a str,
}

impl Display for DocumentNotFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "No job document at {}, skipping", self.path)
    }
}

impl StructuredLog for DocumentNotFound<'_> {
    fn log(&self) {
        tracing::info!(path = self.path, "{}", self);
    }
}

/// A record inside a document was skipped.
///
/// # Log Level
/// `warn!` - Degraded behavior, processing continues
pub struct RecordSkipped<'a> {
    pub document: &'a str,
    /// Zero-based position of the record in the document
    pub index: usize,
    pub reason: &'a str,
}

impl Display for RecordSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Skipping record {} in '{}': {}",
            self.index, self.document, self.reason
        )
    }
}

impl StructuredLog for RecordSkipped<'_> {
    fn log(&self) {
        tracing::warn!(
            document = self.document,
            index = self.index,
            reason = self.reason,
            "{}",
            self
        );
    }
}

/// A job referenced an input file that does not exist.
///
/// # Log Level
/// `warn!` - The job is dropped, the document carries on
pub struct InputFileMissing<'a> {
    pub input_file: &'a str,
}

impl Display for InputFileMissing<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "The input file '{}' does not exist. Please check the file path.",
            self.input_file
        )
    }
}

impl StructuredLog for InputFileMissing<'_> {
    fn log(&self) {
        tracing::warn!(input_file = self.input_file, "{}", self);
    }
}

/// A document was fully processed and removed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct DocumentRemoved<'a> {
    pub path: &'a str,
    pub jobs_processed: usize,
    pub records_skipped: usize,
}

impl Display for DocumentRemoved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Removing successfully processed file: {} ({} processed, {} skipped)",
            self.path, self.jobs_processed, self.records_skipped
        )
    }
}

impl StructuredLog for DocumentRemoved<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            jobs_processed = self.jobs_processed,
            records_skipped = self.records_skipped,
            "{}",
            self
        );
    }
}

/// Processing a document failed; the document stays on disk.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DocumentFailed<'a> {
    pub path: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for DocumentFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "An error occurred while processing '{}': {}. The file was kept for a retry.",
            self.path, self.error
        )
    }
}

impl StructuredLog for DocumentFailed<'_> {
    fn log(&self) {
        tracing::error!(path = self.path, error = %self.error, "{}", self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_skipped_display() {
        let msg = RecordSkipped {
            document: "input.xml",
            index: 3,
            reason: "missing 'input_file' element",
        };
        assert_eq!(
            msg.to_string(),
            "Skipping record 3 in 'input.xml': missing 'input_file' element"
        );
    }

    #[test]
    fn test_document_failed_display() {
        let error = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let msg = DocumentFailed {
            path: "input.json",
            error: &error,
        };
        assert!(msg.to_string().contains("disk full"));
        assert!(msg.to_string().contains("kept for a retry"));
    }
}
