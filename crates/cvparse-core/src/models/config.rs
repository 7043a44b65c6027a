//! Configuration structures for the parsing pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the cvparse pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CvConfig {
    /// Document decoding configuration.
    pub decode: DecodeConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Document decoding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Minimum decoded text length to treat a document as non-empty.
    pub min_text_length: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self { min_text_length: 1 }
    }
}

/// Field extraction configuration.
///
/// Defaults match the heuristics the extractors were tuned for; the
/// windows bound regex and recognizer cost on pathological documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Characters of leading text handed to the name recognizer.
    pub name_window: usize,

    /// Characters of the experience section considered for entries.
    pub experience_window: usize,

    /// Minimum trimmed line length for an experience entry.
    pub min_experience_line_len: usize,

    /// Maximum experience entries kept per record.
    pub max_experience_entries: usize,

    /// Maximum skills kept per record after deduplication.
    pub max_skills: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_window: 500,
            experience_window: 800,
            min_experience_line_len: 30,
            max_experience_entries: 3,
            max_skills: 20,
        }
    }
}

impl CvConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
