// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod document;
pub mod factory;
pub mod job;
pub mod json;
pub mod xml;


pub use document::{DocumentSummary, JobDocumentProcessor};
pub use factory::JobSourceFactory;
pub use job::{JobDescriptor, JobRecord};
pub use json::JsonJobSource;
pub use xml::XmlJobSource;

use crate::errors::IngestError;

/// Outcome of parsing one record of a job document: the raw record, or the
/// reason it has to be skipped.
pub type ParsedRecord = Result<JobRecord, String>;

/// A job document format.
///
/// Implementations turn the full text of a document into its records. A
/// document whose overall shape is unusable fails as a whole; a single bad
/// record is returned as `Err(reason)` so the caller can skip it and go on.
pub trait JobSource {
    fn parse(&self, document: &str) -> Result<Vec<ParsedRecord>, IngestError>;

    /// Format name used in log lines
    fn name(&self) -> &'static str;
}
