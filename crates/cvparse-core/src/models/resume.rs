//! Resume record models.
//!
//! Absent fields are plain `Option`/empty `Vec` values. The legacy
//! display sentinels ("Name Not Found", "Not Specified", ...) exist
//! only at the presentation boundary, produced by the `display_*`
//! helpers below; downstream logic must test the optional state, never
//! string-compare against a sentinel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel shown when no person entity was recognized.
pub const NAME_NOT_FOUND: &str = "Name Not Found";
/// Sentinel shown when no email address matched.
pub const EMAIL_NOT_FOUND: &str = "Email Not Found";
/// Sentinel shown when no phone number matched.
pub const PHONE_NOT_FOUND: &str = "Phone Not Found";
/// Sentinel shown when no vocabulary skill matched.
pub const NO_SKILLS_FOUND: &str = "No skills found";
/// Sentinel shown when no degree keyword matched.
pub const EDUCATION_NOT_FOUND: &str = "Education details not found";
/// Sentinel shown when no experience section was located.
pub const EXPERIENCE_NOT_SPECIFIED: &str = "Work experience not specified";
/// Sentinel shown when no date range was found.
pub const YEARS_NOT_SPECIFIED: &str = "Not Specified";

/// One structured record per successfully decoded resume document.
///
/// Records are assembled once and never revised; `parsed_at` is stamped
/// at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Originating filename. Not unique, not validated.
    pub source_name: String,

    /// First PERSON-labeled span from the recognizer, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,

    /// First email address matched in document order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// First phone match, kept as the raw matched substring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Capitalized vocabulary skills, deduplicated, capped.
    pub skills: Vec<String>,

    /// Degree keywords as matched, deduplicated case-sensitively.
    pub education: Vec<String>,

    /// Up to three qualifying lines from the experience section,
    /// document order preserved.
    pub experience_entries: Vec<String>,

    /// Summed years across all date ranges found. `None` when no range
    /// matched; `Some(0)` when ranges matched but summed to zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_experience_years: Option<u32>,

    /// Extraction timestamp, assigned once at record creation.
    pub parsed_at: DateTime<Utc>,
}

impl ResumeRecord {
    /// Candidate name for display, with the legacy sentinel on miss.
    pub fn display_name(&self) -> &str {
        self.candidate_name.as_deref().unwrap_or(NAME_NOT_FOUND)
    }

    /// Email for display, with the legacy sentinel on miss.
    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or(EMAIL_NOT_FOUND)
    }

    /// Phone for display, with the legacy sentinel on miss.
    pub fn display_phone(&self) -> &str {
        self.phone.as_deref().unwrap_or(PHONE_NOT_FOUND)
    }

    /// Skills for display. Never empty: a single-element sentinel list
    /// stands in when nothing matched.
    pub fn display_skills(&self) -> Vec<String> {
        if self.skills.is_empty() {
            vec![NO_SKILLS_FOUND.to_string()]
        } else {
            self.skills.clone()
        }
    }

    /// Education for display, sentinel list on miss.
    pub fn display_education(&self) -> Vec<String> {
        if self.education.is_empty() {
            vec![EDUCATION_NOT_FOUND.to_string()]
        } else {
            self.education.clone()
        }
    }

    /// Experience entries for display, sentinel list on miss.
    pub fn display_experience(&self) -> Vec<String> {
        if self.experience_entries.is_empty() {
            vec![EXPERIENCE_NOT_SPECIFIED.to_string()]
        } else {
            self.experience_entries.clone()
        }
    }

    /// Total experience years for display. A computed zero renders as
    /// "0"; only a genuine miss renders the sentinel.
    pub fn display_experience_years(&self) -> String {
        match self.total_experience_years {
            Some(years) => years.to_string(),
            None => YEARS_NOT_SPECIFIED.to_string(),
        }
    }
}
