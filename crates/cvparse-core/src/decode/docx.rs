//! DOCX text decoding.
//!
//! A .docx file is a zip container; the body text lives in
//! `word/document.xml`. Text runs are concatenated and paragraph
//! boundaries become newlines so that line-oriented extractors see the
//! same shape a PDF decode produces.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;
use zip::ZipArchive;

use super::{MediaType, Result, TextDecoder};
use crate::error::DecodeError;

const DOCUMENT_PART: &str = "word/document.xml";

/// DOCX text decoder.
pub struct DocxDecoder;

impl DocxDecoder {
    pub fn new() -> Self {
        Self
    }

    fn read_document_xml(data: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(data))
            .map_err(|e| DecodeError::Parse(e.to_string()))?;

        let mut part = archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| DecodeError::Parse(format!("missing {}: {}", DOCUMENT_PART, e)))?;

        let mut xml = String::new();
        part.read_to_string(&mut xml)
            .map_err(|e| DecodeError::Parse(e.to_string()))?;
        Ok(xml)
    }
}

impl Default for DocxDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDecoder for DocxDecoder {
    fn decode(&self, data: &[u8]) -> Result<String> {
        let xml = Self::read_document_xml(data)?;
        let mut reader = Reader::from_str(&xml);

        let mut text = String::new();
        loop {
            match reader.read_event() {
                Ok(Event::Text(t)) => {
                    let chunk = t
                        .unescape()
                        .map_err(|e| DecodeError::TextExtraction(e.to_string()))?;
                    text.push_str(&chunk);
                }
                Ok(Event::Empty(e)) if e.name().as_ref() == b"w:tab" => text.push(' '),
                Ok(Event::Empty(e)) if e.name().as_ref() == b"w:br" => text.push('\n'),
                Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => text.push('\n'),
                Ok(Event::Eof) => break,
                Err(e) => return Err(DecodeError::Parse(e.to_string())),
                _ => {}
            }
        }

        debug!("decoded {} chars from DOCX body", text.len());
        Ok(text)
    }

    fn media_type(&self) -> MediaType {
        MediaType::Docx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn docx_with_body(body_xml: &str) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file(DOCUMENT_PART, SimpleFileOptions::default())
                .unwrap();
            let xml = format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
                body_xml
            );
            writer.write_all(xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let data = docx_with_body(
            "<w:p><w:r><w:t>John Smith</w:t></w:r></w:p><w:p><w:r><w:t>Engineer</w:t></w:r></w:p>",
        );

        let text = DocxDecoder::new().decode(&data).unwrap();
        assert_eq!(text, "John Smith\nEngineer\n");
    }

    #[test]
    fn test_runs_concatenate_within_paragraph() {
        let data = docx_with_body(
            "<w:p><w:r><w:t>python </w:t></w:r><w:r><w:t>developer</w:t></w:r></w:p>",
        );

        let text = DocxDecoder::new().decode(&data).unwrap();
        assert_eq!(text, "python developer\n");
    }

    #[test]
    fn test_non_zip_bytes_fail_to_parse() {
        let err = DocxDecoder::new().decode(b"plain text").unwrap_err();
        assert!(matches!(err, DecodeError::Parse(_)));
    }

    #[test]
    fn test_zip_without_document_part_fails() {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("other.txt", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"hello").unwrap();
            writer.finish().unwrap();
        }

        let err = DocxDecoder::new().decode(&cursor.into_inner()).unwrap_err();
        assert!(matches!(err, DecodeError::Parse(_)));
    }
}
