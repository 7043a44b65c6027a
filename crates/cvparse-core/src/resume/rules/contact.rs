//! Email and phone extraction.

use super::patterns::{EMAIL, PHONE};
use super::FieldExtractor;

/// Email address extractor.
pub struct EmailExtractor;

impl EmailExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        EMAIL.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        EMAIL.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }
}

/// Phone number extractor.
///
/// The pattern is intentionally loose; matched substrings are kept raw,
/// punctuation and all. Runs that contain no digit at all (whitespace
/// and punctuation only, which the pattern admits) are skipped.
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        PHONE
            .find_iter(text)
            .filter(|m| m.as_str().chars().any(|c| c.is_ascii_digit()))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_email_first_match() {
        let extractor = EmailExtractor::new();
        let text = "Contact: jane.doe@example.com or jd@other.org";

        assert_eq!(
            extractor.extract(text),
            Some("jane.doe@example.com".to_string())
        );
        assert_eq!(extractor.extract_all(text).len(), 2);
    }

    #[test]
    fn test_extract_email_miss_is_none() {
        let extractor = EmailExtractor::new();

        assert_eq!(extractor.extract("no contact info here"), None);
        assert_eq!(extractor.extract("bad@@domain and a@b"), None);
    }

    #[test]
    fn test_email_requires_two_char_tld() {
        let extractor = EmailExtractor::new();

        assert_eq!(extractor.extract("x@y.z"), None);
        assert_eq!(extractor.extract("x@y.co"), Some("x@y.co".to_string()));
    }

    #[test]
    fn test_extract_phone_keeps_raw_match() {
        let extractor = PhoneExtractor::new();
        let phone = extractor.extract("Phone: +1 (555) 123-4567").unwrap();

        assert!(phone.contains("555"));
        assert!(phone.contains('('));
    }

    #[test]
    fn test_phone_skips_digitless_runs() {
        let extractor = PhoneExtractor::new();

        // Long whitespace/punctuation runs match the pattern but carry
        // no digits and must not be reported.
        assert_eq!(extractor.extract("name   \n\n   ...   ----"), None);
    }

    #[test]
    fn test_phone_miss_is_none() {
        let extractor = PhoneExtractor::new();
        assert_eq!(extractor.extract("email only: a@b.com"), None);
    }
}
