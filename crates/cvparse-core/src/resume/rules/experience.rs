//! Section-scoped experience extraction.
//!
//! Locates the experience section by header keyword, bounds it at the
//! next section marker (or end of document), and keeps the first few
//! substantial lines. Short lines are treated as headers or noise.

use super::patterns::{SECTION_END, SECTION_HEADER};
use super::head;

/// Experience entries from `text`.
///
/// Empty when no section header is found. At most `max_entries` lines
/// whose trimmed length exceeds `min_line_len`, drawn from the first
/// `window` characters after the header, in document order.
pub fn find_experience_entries(
    text: &str,
    window: usize,
    min_line_len: usize,
    max_entries: usize,
) -> Vec<String> {
    let Some(header) = SECTION_HEADER.find(text) else {
        return Vec::new();
    };

    let after_header = &text[header.end()..];
    let section = match SECTION_END.find(after_header) {
        Some(end) => &after_header[..end.start()],
        None => after_header,
    };

    head(section, window)
        .lines()
        .map(str::trim)
        .filter(|line| line.len() > min_line_len)
        .take(max_entries)
        .map(str::to_string)
        .collect()
}
