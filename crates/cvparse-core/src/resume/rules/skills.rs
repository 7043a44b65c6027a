//! Skills vocabulary matching.

use std::collections::HashSet;

use super::patterns::TECHNICAL_SKILLS;

/// Matches the fixed skills vocabulary against document text.
///
/// Strategy: lower-case the document once, then test each vocabulary
/// term by substring containment. The strategy is isolated here so a
/// token-boundary matcher could replace it without touching callers.
/// Results keep vocabulary iteration order, which is also the order
/// truncation applies in.
pub struct SkillMatcher {
    vocabulary: &'static [&'static str],
    max_skills: usize,
}

impl SkillMatcher {
    pub fn new(max_skills: usize) -> Self {
        Self {
            vocabulary: TECHNICAL_SKILLS,
            max_skills,
        }
    }

    /// All vocabulary terms contained in `text`, capitalized for
    /// display, deduplicated, truncated to the configured cap.
    pub fn find_skills(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut seen = HashSet::new();
        let mut found = Vec::new();

        for term in self.vocabulary {
            if found.len() >= self.max_skills {
                break;
            }
            if lowered.contains(term) {
                let display = capitalize(term);
                if seen.insert(display.clone()) {
                    found.push(display);
                }
            }
        }

        found
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
