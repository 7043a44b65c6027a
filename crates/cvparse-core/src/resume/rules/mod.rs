//! Rule-based field extractors for resume text.

pub mod contact;
pub mod education;
pub mod experience;
pub mod patterns;
pub mod skills;
pub mod tenure;

pub use contact::{EmailExtractor, PhoneExtractor};
pub use education::find_degrees;
pub use experience::find_experience_entries;
pub use skills::SkillMatcher;
pub use tenure::TenureCalculator;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field, in document order.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// The leading `max_chars` characters of `text`, on a char boundary.
pub fn head(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_head_respects_char_boundaries() {
        assert_eq!(head("abcdef", 3), "abc");
        assert_eq!(head("ab", 10), "ab");
        // 'é' is two bytes; slicing must not split it.
        assert_eq!(head("éléve", 2), "él");
    }
}
