// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Consume-once processing of job documents.
//!
//! A document is deleted only after every record in it has been handled
//! without error. Any failure leaves the file where it is, so running again
//! is always safe.

use std::fs;
use std::path::Path;

use super::{JobDescriptor, JobSource, JobSourceFactory};
use crate::config::Config;
use crate::errors::{IngestError, StatsError};
use crate::observability::messages::ingest::{
    DocumentReading, DocumentRemoved, InputFileMissing, RecordSkipped,
};
use crate::observability::messages::StructuredLog;
use crate::stats::{run_job, StatisticsReport};
use crate::store::StatisticsSink;

/// What processing one document did.
#[derive(Debug, Default)]
pub struct DocumentSummary {
    pub reports: Vec<StatisticsReport>,
    /// Jobs whose input file did not exist
    pub inputs_missing: usize,
    /// Records dropped for lacking a usable `input_file` or not being a record at all
    pub records_skipped: usize,
}

impl DocumentSummary {
    pub fn jobs_processed(&self) -> usize {
        self.reports.len()
    }
}

/// Runs every job of a document through the statistics pipeline.
pub struct JobDocumentProcessor<'a> {
    config: &'a Config,
    sink: Option<&'a mut dyn StatisticsSink>,
}

impl<'a> JobDocumentProcessor<'a> {
    pub fn new(config: &'a Config, sink: Option<&'a mut dyn StatisticsSink>) -> Self {
        Self { config, sink }
    }

    /// Process a document, choosing the format from its extension.
    pub fn process(&mut self, path: &Path) -> Result<DocumentSummary, IngestError> {
        let source = JobSourceFactory::for_path(path)?;
        self.process_with(source.as_ref(), path)
    }

    pub fn process_with(
        &mut self,
        source: &dyn JobSource,
        path: &Path,
    ) -> Result<DocumentSummary, IngestError> {
        if !path.exists() {
            return Err(IngestError::MissingDocument(path.to_path_buf()));
        }

        let document_name = path.display().to_string();
        DocumentReading {
            format: source.name(),
            path: &document_name,
        }
        .log();

        let content = fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
        let records = source.parse(&content)?;

        let mut summary = DocumentSummary::default();
        for (index, parsed) in records.into_iter().enumerate() {
            let job = match parsed.and_then(|record| JobDescriptor::from_record(&record, self.config))
            {
                Ok(job) => job,
                Err(reason) => {
                    RecordSkipped {
                        document: &document_name,
                        index,
                        reason: &reason,
                    }
                    .log();
                    summary.records_skipped += 1;
                    continue;
                }
            };

            match run_job(&job, self.sink.as_deref_mut()) {
                Ok(report) => summary.reports.push(report),
                Err(StatsError::MissingInputFile(missing)) => {
                    InputFileMissing {
                        input_file: &missing.display().to_string(),
                    }
                    .log();
                    summary.inputs_missing += 1;
                }
                Err(source) => {
                    return Err(IngestError::Job {
                        input_file: job.input_file,
                        source,
                    })
                }
            }
        }

        fs::remove_file(path).map_err(|e| IngestError::io(path, e))?;
        DocumentRemoved {
            path: &document_name,
            jobs_processed: summary.jobs_processed(),
            records_skipped: summary.records_skipped,
        }
        .log();

        Ok(summary)
    }
}
