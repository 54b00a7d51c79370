// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use super::{JobRecord, JobSource, ParsedRecord};
use crate::errors::IngestError;

/// JSON job documents: a single object, or an array of objects.
pub struct JsonJobSource;

impl JsonJobSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonJobSource {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_record(value: Value) -> ParsedRecord {
    if !value.is_object() {
        return Err("record is not a JSON object".to_string());
    }
    serde_json::from_value::<JobRecord>(value).map_err(|e| format!("invalid record: {}", e))
}

impl JobSource for JsonJobSource {
    fn parse(&self, document: &str) -> Result<Vec<ParsedRecord>, IngestError> {
        let root: Value = serde_json::from_str(document)?;

        match root {
            Value::Object(_) => Ok(vec![parse_record(root)]),
            Value::Array(items) => Ok(items.into_iter().map(parse_record).collect()),
            _ => Err(IngestError::InvalidDocumentShape(
                "Provide a JSON object or a list of objects".to_string(),
            )),
        }
    }

    fn name(&self) -> &'static str {
        "JSON"
    }
}
