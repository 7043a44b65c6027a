//! Core library for resume parsing.
//!
//! This crate provides:
//! - Document decoding (PDF and DOCX to plain text)
//! - Rule-based resume field extraction (name, contact, skills,
//!   education, experience, tenure)
//! - Resume data models and display-sentinel helpers
//! - Batch processing with per-item failure isolation

pub mod batch;
pub mod decode;
pub mod error;
pub mod models;
pub mod resume;

pub use batch::{BatchFailure, BatchItem, BatchOutcome, BatchProcessor};
pub use decode::{decode_document, DocxDecoder, MediaType, PdfDecoder, TextDecoder};
pub use error::{CvError, DecodeError, ExtractionError, Result};
pub use models::config::{CvConfig, DecodeConfig, ExtractionConfig};
pub use models::resume::ResumeRecord;
pub use resume::{HeuristicResumeParser, ParseOutcome, ResumeParser};

/// Re-export recognizer types consumed by the parser.
pub use cvparse_ner::{Entity, EntityRecognizer, NerError, RuleBasedRecognizer};
