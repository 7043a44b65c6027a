//! Common regex patterns and the skills vocabulary for resume extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Standard local-part @ domain form; the TLD segment needs 2+ chars.
    pub static ref EMAIL: Regex = Regex::new(
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"
    ).unwrap();

    // Permissive digit/punctuation run of 7+ chars with optional leading
    // plus signs. Loose on purpose: recall over precision.
    pub static ref PHONE: Regex = Regex::new(
        r"\+*[\d\s().\-]{7,}"
    ).unwrap();

    // Degree keywords, including common abbreviated forms. Deliberately
    // unanchored so "Bachelor's" and "Masters" still hit.
    pub static ref DEGREE: Regex = Regex::new(
        r"(?i)(bachelor|master|phd|mba|b\.tech|m\.tech|b\.sc|m\.sc|degree)"
    ).unwrap();

    // Year ranges in the 2000s, ending in a year or present/current.
    // Matched against lower-cased text.
    pub static ref YEAR_RANGE: Regex = Regex::new(
        r"(20\d{2})\s*[-–]\s*(20\d{2}|present|current)"
    ).unwrap();

    // Experience section boundaries.
    pub static ref SECTION_HEADER: Regex = Regex::new(
        r"(?i)experience|employment history|work experience"
    ).unwrap();

    pub static ref SECTION_END: Regex = Regex::new(
        r"(?i)education|skills|projects"
    ).unwrap();
}

/// Fixed skills vocabulary, lower-cased, in the deterministic order the
/// matcher iterates (which is also the truncation order).
///
/// Matching is substring containment against lower-cased document text,
/// not tokenized: a short term like "go" can spuriously match inside
/// unrelated words. Known limitation, kept for recall.
pub const TECHNICAL_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "c++",
    "c#",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "go",
    "rust",
    "scala",
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "oracle",
    "react",
    "angular",
    "vue",
    "nodejs",
    "django",
    "flask",
    "spring",
    "fastapi",
    "tensorflow",
    "pytorch",
    "keras",
    "scikit-learn",
    "pandas",
    "numpy",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "git",
    "jenkins",
    "machine learning",
    "deep learning",
    "nlp",
    "data science",
    "artificial intelligence",
];
