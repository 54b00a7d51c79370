// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for job and feed document ingestion.
//!
//! Any of these aborts processing of the current document and leaves it on
//! disk so the run can be repeated.

use crate::errors::StatsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    /// The document to ingest does not exist
    #[error("The input document '{}' does not exist. Please check the file path.", .0.display())]
    MissingDocument(PathBuf),

    /// No job source handles the document's extension
    #[error("No job source for '{}': expected a .json or .xml document", .0.display())]
    UnsupportedDocument(PathBuf),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid XML document: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The root is neither an object nor an array, or holds no records
    #[error("Invalid document shape: {0}")]
    InvalidDocumentShape(String),

    /// A job failed for a reason other than a missing input file
    #[error("Job for '{}' failed: {source}", .input_file.display())]
    Job {
        input_file: PathBuf,
        #[source]
        source: StatsError,
    },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IngestError::Io {
            path: path.into(),
            source,
        }
    }
}
