// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::Path;

use super::{JobSource, JsonJobSource, XmlJobSource};
use crate::errors::IngestError;

/// Factory for picking the job source that reads a document
pub struct JobSourceFactory;

impl JobSourceFactory {
    /// Create a job source from a format name
    ///
    /// - "json" -> JsonJobSource
    /// - "xml" -> XmlJobSource
    pub fn create_source(format: &str) -> Option<Box<dyn JobSource>> {
        match format.to_ascii_lowercase().as_str() {
            "json" => Some(Box::new(JsonJobSource::new())),
            "xml" => Some(Box::new(XmlJobSource::new())),
            _ => None,
        }
    }

    /// Create the job source matching the document's file extension
    pub fn for_path(path: &Path) -> Result<Box<dyn JobSource>, IngestError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::create_source)
            .ok_or_else(|| IngestError::UnsupportedDocument(path.to_path_buf()))
    }

    /// List all supported document formats
    pub fn list_available_formats() -> Vec<&'static str> {
        vec!["json", "xml"]
    }
}
