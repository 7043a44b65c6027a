//! Error types for the cvparse-core library.

use thiserror::Error;

/// Main error type for the cvparse library.
#[derive(Error, Debug)]
pub enum CvError {
    /// Document decoding error.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Resume extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Recognizer error from the NER layer.
    #[error("recognizer error: {0}")]
    Ner(#[from] cvparse_ner::NerError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to document decoding.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Failed to open/parse the document container.
    #[error("failed to parse document: {0}")]
    Parse(String),

    /// Failed to extract text from the document.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The document is encrypted and cannot be processed.
    #[error("document is encrypted")]
    Encrypted,

    /// The document decoded to empty or whitespace-only text.
    #[error("document contains no extractable text")]
    EmptyDocument,

    /// The declared format is not one of the supported media types.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Errors related to resume field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The assembler was given empty text. Decode failures are expected
    /// to be caught before this point; this is the only way assembly
    /// can fail.
    #[error("no text to extract from")]
    EmptyText,
}

/// Result type for the cvparse library.
pub type Result<T> = std::result::Result<T, CvError>;
