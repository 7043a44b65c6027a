//! Heuristic resume parser combining rule-based extraction and an
//! optional entity recognizer.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use cvparse_ner::EntityRecognizer;
use tracing::{debug, info, warn};

use crate::models::config::ExtractionConfig;
use crate::models::resume::ResumeRecord;

use super::rules::{
    contact::{EmailExtractor, PhoneExtractor},
    education::find_degrees,
    experience::find_experience_entries,
    head,
    skills::SkillMatcher,
    tenure::TenureCalculator,
    FieldExtractor,
};
use super::{ExtractionError, Result};

/// Result of parsing one resume document.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Assembled resume record.
    pub record: ResumeRecord,
    /// Extraction warnings (field misses, recognizer trouble).
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for resume parsing.
pub trait ResumeParser {
    /// Parse a resume from decoded text.
    fn parse(&self, text: &str, source_name: &str) -> Result<ParseOutcome>;
}

/// Rule-based resume parser.
///
/// Holds the extraction configuration and an optional recognizer
/// handle; both are read-only and reusable across sequential documents.
pub struct HeuristicResumeParser {
    config: ExtractionConfig,
    recognizer: Option<Arc<dyn EntityRecognizer>>,
    tenure: TenureCalculator,
}

impl HeuristicResumeParser {
    /// Create a parser with default settings and no recognizer.
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
            recognizer: None,
            tenure: TenureCalculator::new(),
        }
    }

    /// Set the extraction configuration.
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach an entity recognizer for name extraction. Without one,
    /// name extraction always misses.
    pub fn with_recognizer(mut self, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    /// Fix the year "present"/"current" resolves to.
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.tenure = TenureCalculator::with_reference_year(year);
        self
    }

    /// First PERSON span over the leading name window, if a recognizer
    /// is attached and finds one. Recognizer failures degrade to a miss.
    fn extract_name(&self, text: &str, warnings: &mut Vec<String>) -> Option<String> {
        let recognizer = self.recognizer.as_ref()?;
        let window = head(text, self.config.name_window);

        match recognizer.entities(window) {
            Ok(entities) => entities
                .into_iter()
                .find(|e| e.is_person())
                .map(|e| e.text),
            Err(e) => {
                warn!("recognizer failed, name degraded to miss: {}", e);
                warnings.push(format!("recognizer failed: {}", e));
                None
            }
        }
    }
}

impl Default for HeuristicResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser for HeuristicResumeParser {
    fn parse(&self, text: &str, source_name: &str) -> Result<ParseOutcome> {
        let start = Instant::now();

        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyText);
        }

        info!(
            "parsing resume {} from {} characters of text",
            source_name,
            text.len()
        );

        let mut warnings = Vec::new();

        let candidate_name = self.extract_name(text, &mut warnings);
        if candidate_name.is_none() {
            warnings.push("could not extract candidate name".to_string());
        }

        let email = EmailExtractor::new().extract(text);
        if email.is_none() {
            warnings.push("could not extract email".to_string());
        }

        let phone = PhoneExtractor::new().extract(text);
        if phone.is_none() {
            warnings.push("could not extract phone".to_string());
        }

        let skills = SkillMatcher::new(self.config.max_skills).find_skills(text);
        if skills.is_empty() {
            warnings.push("no vocabulary skills matched".to_string());
        }

        let education = find_degrees(text);
        if education.is_empty() {
            warnings.push("no degree keywords matched".to_string());
        }

        let experience_entries = find_experience_entries(
            text,
            self.config.experience_window,
            self.config.min_experience_line_len,
            self.config.max_experience_entries,
        );
        if experience_entries.is_empty() {
            warnings.push("no experience section located".to_string());
        }

        let total_experience_years = self.tenure.total_years(text);
        if total_experience_years.is_none() {
            warnings.push("no date ranges found".to_string());
        }

        let record = ResumeRecord {
            source_name: source_name.to_string(),
            candidate_name,
            email,
            phone,
            skills,
            education,
            experience_entries,
            total_experience_years,
            parsed_at: Utc::now(),
        };

        debug!(
            "parsed {} with {} warnings in {:?}",
            source_name,
            warnings.len(),
            start.elapsed()
        );

        Ok(ParseOutcome {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvparse_ner::{Entity, NerError, RuleBasedRecognizer};
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
John Smith
john.smith@example.com | +1 (555) 123-4567

Work Experience
Senior Software Engineer at Acme Corporation, 2018-2020
Built data pipelines with python, pandas and docker in the cloud
Backend Developer at Widgets Inc between 2020-2022 doing sql work

Education
Bachelor of Science, later an MBA

Skills
python, sql, docker, aws";

    fn parser() -> HeuristicResumeParser {
        HeuristicResumeParser::new()
            .with_recognizer(Arc::new(RuleBasedRecognizer::new()))
            .with_reference_year(2024)
    }

    #[test]
    fn test_full_parse() {
        let outcome = parser().parse(SAMPLE, "john.pdf").unwrap();
        let record = outcome.record;

        assert_eq!(record.source_name, "john.pdf");
        assert_eq!(record.candidate_name.as_deref(), Some("John Smith"));
        assert_eq!(record.email.as_deref(), Some("john.smith@example.com"));
        assert!(record.phone.as_deref().unwrap().contains("555"));
        assert!(record.skills.contains(&"Python".to_string()));
        assert!(record.skills.contains(&"Docker".to_string()));
        assert!(record.education.contains(&"Bachelor".to_string()));
        assert!(record.education.contains(&"MBA".to_string()));
        assert!(!record.experience_entries.is_empty());
        assert_eq!(record.total_experience_years, Some(4));
    }

    #[test]
    fn test_empty_text_is_the_only_failure() {
        let parser = parser();

        assert!(matches!(
            parser.parse("", "empty.pdf"),
            Err(ExtractionError::EmptyText)
        ));
        assert!(matches!(
            parser.parse("   \n\t  ", "blank.pdf"),
            Err(ExtractionError::EmptyText)
        ));
        // Nonsense text still assembles a record.
        assert!(parser.parse("zzzz", "junk.pdf").is_ok());
    }

    #[test]
    fn test_misses_degrade_to_absent_fields() {
        let outcome = parser().parse("nothing useful here", "min.pdf").unwrap();
        let record = outcome.record;

        assert!(record.email.is_none());
        assert!(record.phone.is_none());
        assert!(record.skills.is_empty());
        assert!(record.education.is_empty());
        assert!(record.experience_entries.is_empty());
        assert!(record.total_experience_years.is_none());
        assert!(!outcome.warnings.is_empty());
    }

    #[test]
    fn test_without_recognizer_name_misses() {
        let parser = HeuristicResumeParser::new().with_reference_year(2024);
        let outcome = parser.parse(SAMPLE, "john.pdf").unwrap();

        assert!(outcome.record.candidate_name.is_none());
        assert!(outcome
            .warnings
            .iter()
            .any(|w| w.contains("candidate name")));
    }

    #[test]
    fn test_failing_recognizer_degrades_to_miss() {
        struct Broken;
        impl EntityRecognizer for Broken {
            fn entities(&self, _text: &str) -> cvparse_ner::Result<Vec<Entity>> {
                Err(NerError::RecognitionFailed("boom".to_string()))
            }
            fn name(&self) -> &str {
                "broken"
            }
        }

        let parser = HeuristicResumeParser::new().with_recognizer(Arc::new(Broken));
        let outcome = parser.parse(SAMPLE, "john.pdf").unwrap();

        assert!(outcome.record.candidate_name.is_none());
        assert!(outcome.warnings.iter().any(|w| w.contains("recognizer")));
    }

    #[test]
    fn test_name_window_excludes_late_names() {
        let mut text = String::from("Anonymous applicant\n");
        text.push_str(&"filler line of plain lowercase words\n".repeat(30));
        text.push_str("References: Maria Santos\n");

        let outcome = parser().parse(&text, "ref.pdf").unwrap();
        assert!(outcome.record.candidate_name.is_none());
    }

    #[test]
    fn test_idempotent_except_timestamp() {
        let parser = parser();
        let first = parser.parse(SAMPLE, "john.pdf").unwrap().record;
        let second = parser.parse(SAMPLE, "john.pdf").unwrap().record;

        assert_eq!(first.candidate_name, second.candidate_name);
        assert_eq!(first.email, second.email);
        assert_eq!(first.phone, second.phone);
        assert_eq!(first.skills, second.skills);
        assert_eq!(first.education, second.education);
        assert_eq!(first.experience_entries, second.experience_entries);
        assert_eq!(first.total_experience_years, second.total_experience_years);
    }
}
