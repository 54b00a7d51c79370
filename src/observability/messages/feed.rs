// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the record feed.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Buffered records were appended to the feed file.
///
/// # Log Level
/// `info!` - Important operational event
pub struct FeedSaved<'a> {
    pub path: &'a str,
    pub record_count: usize,
}

impl Display for FeedSaved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Saved {} record(s) to {}", self.record_count, self.path)
    }
}

impl StructuredLog for FeedSaved<'_> {
    fn log(&self) {
        tracing::info!(path = self.path, record_count = self.record_count, "{}", self);
    }
}

/// A flat line carried a type tag that no record kind matches.
///
/// # Log Level
/// `warn!` - Line skipped, processing continues
pub struct UnknownRecordType<'a> {
    pub tag: &'a str,
    pub line_number: usize,
}

impl Display for UnknownRecordType<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unknown record type '{}' on line {}. Skipping line.",
            self.tag, self.line_number
        )
    }
}

impl StructuredLog for UnknownRecordType<'_> {
    fn log(&self) {
        tracing::warn!(tag = self.tag, line_number = self.line_number, "{}", self);
    }
}
