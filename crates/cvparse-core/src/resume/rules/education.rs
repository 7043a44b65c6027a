//! Degree keyword extraction.

use super::patterns::DEGREE;

/// All degree keywords matched in `text`, in document order, kept in
/// the case they appeared in and deduplicated case-sensitively ("MBA"
/// and "mba" are distinct entries).
pub fn find_degrees(text: &str) -> Vec<String> {
    let mut degrees: Vec<String> = Vec::new();

    for m in DEGREE.find_iter(text) {
        let matched = m.as_str().to_string();
        if !degrees.contains(&matched) {
            degrees.push(matched);
        }
    }

    degrees
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_finds_degrees_as_matched() {
        let degrees = find_degrees("I have a Bachelor's and an MBA");

        assert!(degrees.contains(&"Bachelor".to_string()));
        assert!(degrees.contains(&"MBA".to_string()));
    }

    #[test]
    fn test_case_sensitive_dedup() {
        let degrees = find_degrees("MBA holder, completed mba in 2015, MBA program");

        assert_eq!(degrees, vec!["MBA".to_string(), "mba".to_string()]);
    }

    #[test]
    fn test_abbreviated_forms() {
        let degrees = find_degrees("B.Tech in CS, then M.Sc abroad");

        assert_eq!(degrees, vec!["B.Tech".to_string(), "M.Sc".to_string()]);
    }

    #[test]
    fn test_no_degrees_is_empty() {
        assert!(find_degrees("self-taught programmer").is_empty());
    }
}
