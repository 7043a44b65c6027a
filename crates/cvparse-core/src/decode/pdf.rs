//! PDF text decoding using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{MediaType, Result, TextDecoder};
use crate::error::DecodeError;

/// PDF text decoder.
///
/// lopdf validates the container (and decrypts empty-password PDFs);
/// pdf-extract does the actual text extraction.
pub struct PdfDecoder;

impl PdfDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDecoder for PdfDecoder {
    fn decode(&self, data: &[u8]) -> Result<String> {
        let mut doc = Document::load_mem(data).map_err(|e| DecodeError::Parse(e.to_string()))?;

        let raw_data = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(DecodeError::Encrypted);
            }
            debug!("decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| DecodeError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(DecodeError::Parse("PDF has no pages".to_string()));
        }
        debug!("loaded PDF with {} pages", page_count);

        let text = pdf_extract::extract_text_from_mem(&raw_data)
            .map_err(|e| DecodeError::TextExtraction(e.to_string()))?;
        Ok(text)
    }

    fn media_type(&self) -> MediaType {
        MediaType::Pdf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_fail_to_parse() {
        let decoder = PdfDecoder::new();
        let err = decoder.decode(b"not a pdf at all").unwrap_err();

        assert!(matches!(err, DecodeError::Parse(_)));
    }
}
