//! Rule-based entity recognizer.
//!
//! Tags runs of capitalized words as PERSON candidates. This is the
//! fallback backend used when no trained model is wired in; it trades
//! precision for availability and is good enough for the "name at the
//! top of the document" case the extraction core feeds it.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use super::{Entity, EntityRecognizer, Result, PERSON_LABEL};

lazy_static! {
    // A name-like token: leading uppercase, then letters, apostrophes
    // or hyphens. Rejects digits and all-punctuation tokens.
    static ref NAME_TOKEN: Regex = Regex::new(r"^[A-Z][a-zA-Z'\-]*$").unwrap();
}

// Document furniture that looks like capitalized words but never forms
// part of a candidate name.
const STOPWORDS: &[&str] = &[
    "resume",
    "curriculum",
    "vitae",
    "summary",
    "objective",
    "profile",
    "contact",
    "experience",
    "employment",
    "education",
    "skills",
    "projects",
    "references",
    "work",
    "history",
    "professional",
    "personal",
];

/// Capitalization-heuristic recognizer.
pub struct RuleBasedRecognizer {
    /// Minimum run length to report as a PERSON span.
    min_words: usize,
    /// Maximum run length to report as a PERSON span.
    max_words: usize,
}

impl RuleBasedRecognizer {
    pub fn new() -> Self {
        Self {
            min_words: 2,
            max_words: 4,
        }
    }

    fn is_name_token(token: &str) -> bool {
        let trimmed = token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-');
        if trimmed.is_empty() || !NAME_TOKEN.is_match(trimmed) {
            return false;
        }
        !STOPWORDS.contains(&trimmed.to_lowercase().as_str())
    }

    fn clean_token(token: &str) -> &str {
        token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-')
    }
}

impl Default for RuleBasedRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer for RuleBasedRecognizer {
    fn entities(&self, text: &str) -> Result<Vec<Entity>> {
        let mut entities = Vec::new();

        for line in text.lines() {
            let mut run: Vec<&str> = Vec::new();

            let mut flush = |run: &mut Vec<&str>, entities: &mut Vec<Entity>| {
                if run.len() >= self.min_words && run.len() <= self.max_words {
                    let span = run.join(" ");
                    trace!("tagged PERSON candidate: {}", span);
                    entities.push(Entity::new(span, PERSON_LABEL));
                }
                run.clear();
            };

            for token in line.split_whitespace() {
                if Self::is_name_token(token) {
                    run.push(Self::clean_token(token));
                    // Trailing separators end the span even when the
                    // token itself is name-like.
                    if token.ends_with([',', ';', ':', '|']) {
                        flush(&mut run, &mut entities);
                    }
                } else {
                    flush(&mut run, &mut entities);
                }
            }
            flush(&mut run, &mut entities);
        }

        Ok(entities)
    }

    fn name(&self) -> &str {
        "rule-based"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tags_name_at_top() {
        let recognizer = RuleBasedRecognizer::new();
        let entities = recognizer
            .entities("John Smith\nSoftware Engineer with python experience")
            .unwrap();

        assert!(!entities.is_empty());
        assert_eq!(entities[0].text, "John Smith");
        assert!(entities[0].is_person());
    }

    #[test]
    fn test_skips_section_headers() {
        let recognizer = RuleBasedRecognizer::new();
        let entities = recognizer.entities("Work Experience\nEducation Skills").unwrap();

        assert!(entities.is_empty());
    }

    #[test]
    fn test_skips_single_words_and_long_runs() {
        let recognizer = RuleBasedRecognizer::new();
        let entities = recognizer
            .entities("Python\nOne Two Three Four Five Six")
            .unwrap();

        assert!(entities.is_empty());
    }

    #[test]
    fn test_handles_punctuation_around_tokens() {
        let recognizer = RuleBasedRecognizer::new();
        let entities = recognizer.entities("Jane O'Brien, Senior Developer").unwrap();

        assert_eq!(entities[0].text, "Jane O'Brien");
    }

    #[test]
    fn test_rejects_tokens_with_digits() {
        let recognizer = RuleBasedRecognizer::new();
        let entities = recognizer.entities("Java8 Spring5").unwrap();

        assert!(entities.is_empty());
    }
}
