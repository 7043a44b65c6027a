//! Total-tenure calculation from date ranges.

use chrono::{Datelike, Utc};

use super::patterns::YEAR_RANGE;

/// Sums employment years across all date ranges in a document.
///
/// Ranges are independent: overlapping periods double-count and no
/// deduplication is attempted. Known limitation, kept as documented
/// behavior.
pub struct TenureCalculator {
    /// Year substituted for a "present"/"current" end token.
    reference_year: i32,
}

impl TenureCalculator {
    /// Calculator anchored at the current calendar year.
    pub fn new() -> Self {
        Self {
            reference_year: Utc::now().year(),
        }
    }

    /// Calculator anchored at a fixed year. Used by batch runs so every
    /// record in one run resolves "present" identically, and by tests.
    pub fn with_reference_year(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /// Total years across all ranges, or `None` when no range matched.
    ///
    /// Each range contributes `max(0, end - start)`; reversed ranges
    /// never subtract. A sum of zero from real ranges is `Some(0)`,
    /// distinct from the no-ranges case.
    pub fn total_years(&self, text: &str) -> Option<u32> {
        let lowered = text.to_lowercase();
        let mut total: i32 = 0;
        let mut matched = false;

        for caps in YEAR_RANGE.captures_iter(&lowered) {
            matched = true;

            let start: i32 = match caps[1].parse() {
                Ok(year) => year,
                Err(_) => continue,
            };
            let end_token = &caps[2];
            let end = if end_token.contains("present") || end_token.contains("current") {
                self.reference_year
            } else {
                match end_token.parse() {
                    Ok(year) => year,
                    Err(_) => continue,
                }
            };

            total += (end - start).max(0);
        }

        matched.then(|| total as u32)
    }
}

impl Default for TenureCalculator {
    fn default() -> Self {
        Self::new()
    }
}
