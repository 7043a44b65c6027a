//! Document decoding module.
//!
//! Turns raw file bytes of a declared media type into plain UTF-8 text.
//! The filename extension is the sole format-dispatch signal; there is
//! no content sniffing.

mod docx;
mod pdf;

pub use docx::DocxDecoder;
pub use pdf::PdfDecoder;

use std::path::Path;

use crate::error::DecodeError;

/// Result type for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Supported document media types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// application/pdf
    Pdf,
    /// application/vnd.openxmlformats-officedocument.wordprocessingml.document
    Docx,
}

impl MediaType {
    /// Determine the media type from a filename extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "pdf" => Ok(MediaType::Pdf),
            "docx" => Ok(MediaType::Docx),
            _ => Err(DecodeError::UnsupportedFormat(ext)),
        }
    }

}

/// Trait for format-specific text decoders.
pub trait TextDecoder {
    /// Decode raw document bytes into plain text.
    fn decode(&self, data: &[u8]) -> Result<String>;

    /// The media type this decoder handles.
    fn media_type(&self) -> MediaType;
}

/// Decode document bytes of the given media type into usable text.
///
/// Output whose trimmed length falls below `min_text_length` is
/// reported as `EmptyDocument`; callers never see a record built from
/// empty or near-empty text. The default threshold of 1 rejects exactly
/// the whitespace-only case.
pub fn decode_document(
    data: &[u8],
    media_type: MediaType,
    min_text_length: usize,
) -> Result<String> {
    let text = match media_type {
        MediaType::Pdf => PdfDecoder::new().decode(data)?,
        MediaType::Docx => DocxDecoder::new().decode(data)?,
    };

    if text.trim().chars().count() < min_text_length {
        return Err(DecodeError::EmptyDocument);
    }
    Ok(text)
}
