// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use quick_xml::events::Event;
use quick_xml::Reader;

use super::{JobRecord, JobSource, ParsedRecord};
use crate::errors::IngestError;

const RECORD: &[u8] = b"record";

/// XML job documents whose root holds `record` elements.
///
/// ```xml
/// <records>
///   <record>
///     <input_file>a.txt</input_file>
///     <word_count_csv>out/w.csv</word_count_csv>
///   </record>
/// </records>
/// ```
///
/// Records are read one at a time, so a record with unusable content is
/// skipped on its own. Other children of the root are ignored.
pub struct XmlJobSource;

impl XmlJobSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for XmlJobSource {
    fn default() -> Self {
        Self::new()
    }
}

fn field_slot<'r>(record: &'r mut JobRecord, name: &[u8]) -> Option<&'r mut Option<String>> {
    match name {
        b"input_file" => Some(&mut record.input_file),
        b"word_count_csv" => Some(&mut record.word_count_csv),
        b"letter_count_csv" => Some(&mut record.letter_count_csv),
        _ => None,
    }
}

fn append_text(record: &mut JobRecord, field: Option<&[u8]>, text: &str) {
    if let Some(slot) = field.and_then(|name| field_slot(record, name)) {
        slot.get_or_insert_with(String::new).push_str(text);
    }
}

/// Read one `record` element whose start tag has just been consumed.
///
/// The outer error is a syntax error that fails the document; the inner one is
/// the reason to skip this record.
fn read_record(reader: &mut Reader<&[u8]>) -> Result<ParsedRecord, IngestError> {
    let mut record = JobRecord::default();
    let mut problem: Option<String> = None;
    let mut field: Option<Vec<u8>> = None;
    // Depth below the record element
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                depth += 1;
                if depth == 1 {
                    field = Some(start.name().as_ref().to_vec());
                } else if problem.is_none() {
                    problem = Some(format!(
                        "unexpected element <{}> inside a record field",
                        String::from_utf8_lossy(start.name().as_ref())
                    ));
                }
            }
            Event::Empty(empty) => {
                if depth > 0 && problem.is_none() {
                    problem = Some(format!(
                        "unexpected element <{}> inside a record field",
                        String::from_utf8_lossy(empty.name().as_ref())
                    ));
                }
            }
            Event::Text(text) if depth == 1 => {
                append_text(&mut record, field.as_deref(), &text.unescape()?);
            }
            Event::CData(data) if depth == 1 => {
                let bytes = data.into_inner();
                append_text(&mut record, field.as_deref(), &String::from_utf8_lossy(&bytes));
            }
            Event::End(_) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
                if depth == 0 {
                    field = None;
                }
            }
            Event::Eof => {
                return Err(IngestError::InvalidDocumentShape(
                    "Unterminated <record> element".to_string(),
                ))
            }
            _ => {}
        }
    }

    Ok(match problem {
        Some(reason) => Err(reason),
        None => Ok(record),
    })
}

impl JobSource for XmlJobSource {
    fn parse(&self, document: &str) -> Result<Vec<ParsedRecord>, IngestError> {
        let mut reader = Reader::from_str(document);
        reader.trim_text(true);

        let mut records = Vec::new();
        let mut depth = 0usize;
        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    if depth == 1 && start.name().as_ref() == RECORD {
                        records.push(read_record(&mut reader)?);
                    } else {
                        depth += 1;
                    }
                }
                Event::Empty(empty) => {
                    if depth == 1 && empty.name().as_ref() == RECORD {
                        records.push(Ok(JobRecord::default()));
                    }
                }
                Event::End(_) => depth = depth.saturating_sub(1),
                Event::Eof => break,
                _ => {}
            }
        }

        if records.is_empty() {
            return Err(IngestError::InvalidDocumentShape(
                "No records found in the XML file".to_string(),
            ));
        }
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "XML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_with_optional_children() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<records>
  <record>
    <input_file>a.txt</input_file>
  </record>
  <record>
    <input_file>b.txt</input_file>
    <word_count_csv>out/b-words.csv</word_count_csv>
    <letter_count_csv>out/b-letters.csv</letter_count_csv>
  </record>
</records>"#;

        let records = XmlJobSource::new().parse(xml).unwrap();
        assert_eq!(records.len(), 2);

        let first = records[0].as_ref().unwrap();
        assert_eq!(first.input_file.as_deref(), Some("a.txt"));
        assert_eq!(first.word_count_csv, None);

        let second = records[1].as_ref().unwrap();
        assert_eq!(second.letter_count_csv.as_deref(), Some("out/b-letters.csv"));
    }

    #[test]
    fn test_record_without_input_file_parses() {
        let xml = "<records><record><word_count_csv>w.csv</word_count_csv></record></records>";
        let records = XmlJobSource::new().parse(xml).unwrap();
        assert_eq!(records[0].as_ref().unwrap().input_file, None);
    }

    #[test]
    fn test_root_without_records_is_invalid_shape() {
        let result = XmlJobSource::new().parse("<records></records>");
        assert!(matches!(result, Err(IngestError::InvalidDocumentShape(_))));
    }

    #[test]
    fn test_other_siblings_between_records_are_ignored() {
        let xml = "<records>\
                   <record><input_file>a.txt</input_file></record>\
                   <note>x</note>\
                   <record><input_file>b.txt</input_file></record>\
                   </records>";

        let records = XmlJobSource::new().parse(xml).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].as_ref().unwrap().input_file.as_deref(), Some("b.txt"));
    }

    #[test]
    fn test_text_only_record_has_no_input_file() {
        let xml = "<records><record>a</record><record><input_file>b.txt</input_file></record></records>";

        let records = XmlJobSource::new().parse(xml).unwrap();
        assert_eq!(records[0].as_ref().unwrap().input_file, None);
        assert_eq!(records[1].as_ref().unwrap().input_file.as_deref(), Some("b.txt"));
    }

    #[test]
    fn test_nested_element_in_field_skips_only_that_record() {
        let xml = "<records>\
                   <record><input_file><x/></input_file></record>\
                   <record><input_file>b.txt</input_file></record>\
                   </records>";

        let records = XmlJobSource::new().parse(xml).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_err());
        assert_eq!(records[1].as_ref().unwrap().input_file.as_deref(), Some("b.txt"));
    }

    #[test]
    fn test_escaped_text_is_unescaped() {
        let xml = "<records><record><input_file>a&amp;b.txt</input_file></record></records>";
        let records = XmlJobSource::new().parse(xml).unwrap();
        assert_eq!(records[0].as_ref().unwrap().input_file.as_deref(), Some("a&b.txt"));
    }

    #[test]
    fn test_mismatched_tags_fail_the_document() {
        let result = XmlJobSource::new().parse("<records><record></wrong></records>");
        assert!(matches!(result, Err(IngestError::Xml(_))));
    }
}
