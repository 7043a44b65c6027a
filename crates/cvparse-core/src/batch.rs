//! Batch processing with per-item failure isolation.
//!
//! Items are processed strictly in input order, each to completion
//! before the next begins. One item's decode or extraction failure is
//! reported and skipped; the batch never aborts because of it.

use std::path::Path;

use tracing::{debug, warn};

use crate::decode::{decode_document, MediaType};
use crate::models::config::DecodeConfig;
use crate::models::resume::ResumeRecord;
use crate::resume::{HeuristicResumeParser, ResumeParser};

/// One document queued for batch processing.
#[derive(Debug, Clone)]
pub struct BatchItem {
    /// Declared filename; its extension is the sole dispatch signal.
    pub source_name: String,
    /// Raw document bytes.
    pub bytes: Vec<u8>,
}

impl BatchItem {
    pub fn new(source_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            source_name: source_name.into(),
            bytes,
        }
    }
}

/// A reported per-item failure.
#[derive(Debug, Clone)]
pub struct BatchFailure {
    /// Filename of the failed item.
    pub source_name: String,
    /// Human-readable failure reason.
    pub reason: String,
}

/// Result of a batch run: successes and failures, each in input order.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successfully extracted records.
    pub records: Vec<ResumeRecord>,
    /// Per-item failure reports.
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    /// Total items processed.
    pub fn total(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Sequential batch coordinator.
pub struct BatchProcessor {
    parser: HeuristicResumeParser,
    decode: DecodeConfig,
}

impl BatchProcessor {
    pub fn new(parser: HeuristicResumeParser) -> Self {
        Self {
            parser,
            decode: DecodeConfig::default(),
        }
    }

    /// Set the decode configuration applied to every item.
    pub fn with_decode_config(mut self, decode: DecodeConfig) -> Self {
        self.decode = decode;
        self
    }

    /// Process items in order, collecting records and failures.
    pub fn process<I>(&self, items: I) -> BatchOutcome
    where
        I: IntoIterator<Item = BatchItem>,
    {
        let mut outcome = BatchOutcome::default();

        for item in items {
            match self.process_one(&item) {
                Ok(record) => outcome.records.push(record),
                Err(failure) => outcome.failures.push(failure),
            }
        }

        outcome
    }

    /// Decode and extract a single item. Decode failures and empty
    /// documents come back as a reported `BatchFailure`, never a panic
    /// or an aborted run.
    pub fn process_one(&self, item: &BatchItem) -> Result<ResumeRecord, BatchFailure> {
        self.try_item(item).map_err(|reason| {
            warn!("skipping {}: {}", item.source_name, reason);
            BatchFailure {
                source_name: item.source_name.clone(),
                reason,
            }
        })
    }

    fn try_item(&self, item: &BatchItem) -> Result<ResumeRecord, String> {
        let media_type =
            MediaType::from_path(Path::new(&item.source_name)).map_err(|e| e.to_string())?;

        let text = decode_document(&item.bytes, media_type, self.decode.min_text_length)
            .map_err(|e| e.to_string())?;

        let outcome = self
            .parser
            .parse(&text, &item.source_name)
            .map_err(|e| e.to_string())?;

        debug!("extracted record from {}", item.source_name);
        Ok(outcome.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn docx_bytes(lines: &[&str]) -> Vec<u8> {
        let paragraphs: String = lines
            .iter()
            .map(|l| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", l))
            .collect();
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            paragraphs
        );

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("word/document.xml", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    fn resume_docx(email: &str) -> Vec<u8> {
        docx_bytes(&[
            "Jane Doe",
            email,
            "Experience",
            "Senior Developer at Example Corp working with python, 2019-2021",
        ])
    }

    #[test]
    fn test_failure_isolation_preserves_order() {
        let processor = BatchProcessor::new(HeuristicResumeParser::new());
        let items = vec![
            BatchItem::new("first.docx", resume_docx("first@example.com")),
            BatchItem::new("notes.txt", b"plain text".to_vec()),
            BatchItem::new("third.docx", resume_docx("third@example.com")),
        ];

        let outcome = processor.process(items);

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.total(), 3);

        assert_eq!(outcome.records[0].source_name, "first.docx");
        assert_eq!(outcome.records[0].email.as_deref(), Some("first@example.com"));
        assert_eq!(outcome.records[1].source_name, "third.docx");
        assert_eq!(outcome.records[1].email.as_deref(), Some("third@example.com"));

        assert_eq!(outcome.failures[0].source_name, "notes.txt");
        assert!(outcome.failures[0].reason.contains("unsupported"));
    }

    #[test]
    fn test_undecodable_item_is_reported_not_fatal() {
        let processor = BatchProcessor::new(HeuristicResumeParser::new());
        let items = vec![
            BatchItem::new("broken.docx", b"not a zip".to_vec()),
            BatchItem::new("good.docx", resume_docx("ok@example.com")),
        ];

        let outcome = processor.process(items);

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].source_name, "broken.docx");
    }

    #[test]
    fn test_empty_document_is_a_failure_not_a_record() {
        let processor = BatchProcessor::new(HeuristicResumeParser::new());
        let items = vec![BatchItem::new("empty.docx", docx_bytes(&["", "  "]))];

        let outcome = processor.process(items);

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.failures.len(), 1);
        assert!(outcome.failures[0].reason.contains("no extractable text"));
    }

    #[test]
    fn test_min_text_length_applies_per_item() {
        let items = vec![BatchItem::new(
            "short.docx",
            resume_docx("short@example.com"),
        )];

        // Default threshold accepts the document.
        let outcome = BatchProcessor::new(HeuristicResumeParser::new()).process(items.clone());
        assert_eq!(outcome.records.len(), 1);

        // A configured threshold above the decoded length rejects it.
        let strict = BatchProcessor::new(HeuristicResumeParser::new()).with_decode_config(
            DecodeConfig {
                min_text_length: 10_000,
            },
        );
        let outcome = strict.process(items);

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.failures.len(), 1);
        assert!(outcome.failures[0].reason.contains("no extractable text"));
    }

    #[test]
    fn test_empty_input_is_empty_outcome() {
        let processor = BatchProcessor::new(HeuristicResumeParser::new());
        let outcome = processor.process(Vec::new());

        assert_eq!(outcome.total(), 0);
    }
}
