//! Named-entity recognition abstraction for cvparse.
//!
//! This crate provides a unified interface for tagging entity spans in
//! plain text. The extraction core only consumes PERSON-labeled spans;
//! everything else a backend reports is ignored upstream.
//!
//! Backends:
//! - `RuleBasedRecognizer` - dependency-free capitalization heuristics,
//!   always available

mod error;
mod rule_based;

pub use error::NerError;
pub use rule_based::RuleBasedRecognizer;

/// Result type for recognizer operations.
pub type Result<T> = std::result::Result<T, NerError>;

/// Label attached to PERSON spans.
pub const PERSON_LABEL: &str = "PERSON";

/// A labeled text span produced by a recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// The matched span text.
    pub text: String,
    /// Entity label (e.g. "PERSON", "ORG").
    pub label: String,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }

    /// Whether this span is labeled as a person name.
    pub fn is_person(&self) -> bool {
        self.label.eq_ignore_ascii_case(PERSON_LABEL)
    }
}

/// Trait for entity recognizer backends.
///
/// Implementations must be safe to reuse across sequential calls; the
/// extraction core holds one recognizer for a whole batch run.
pub trait EntityRecognizer: Send + Sync {
    /// Tag entity spans in the given text, in document order.
    fn entities(&self, text: &str) -> Result<Vec<Entity>>;

    /// Human-readable backend name, used in logs.
    fn name(&self) -> &str;
}
