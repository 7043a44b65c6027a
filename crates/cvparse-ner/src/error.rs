//! Error types for the recognizer layer.

use thiserror::Error;

/// Errors that can occur during entity recognition.
#[derive(Error, Debug)]
pub enum NerError {
    /// Failed to construct or load a recognizer backend.
    #[error("failed to load recognizer: {0}")]
    ModelLoad(String),

    /// Recognition over a text span failed.
    #[error("recognition failed: {0}")]
    RecognitionFailed(String),

    /// I/O error when loading backend resources.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
