//! Deadline date extraction

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::MAX_MATCHES;

static DEADLINE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Deadline: March 15, 2025
        r"(?i)(?:deadline|due date|submit by|closing date|applications? close)[:\s]*([A-Za-z]+ \d{1,2},?\s*\d{4})",
        // Due date: 15/03/2025
        r"(?i)(?:deadline|due date|submit by|closing date)[:\s]*(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})",
        // 15 March 2025, anywhere
        r"(?i)(\d{1,2}\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid deadline regex"))
    .collect()
});

/// Extract deadline dates
///
/// Duplicates are dropped keeping the first occurrence, then the list is cut
/// to five entries.
pub fn extract_deadlines(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    DEADLINE_PATTERNS
        .iter()
        .flat_map(|re| {
            re.captures_iter(text)
                .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        })
        .filter(|date| seen.insert(date.clone()))
        .take(MAX_MATCHES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_month_name() {
        assert_eq!(extract_deadlines("Deadline: March 15, 2025."), vec!["March 15, 2025"]);
        assert_eq!(
            extract_deadlines("Applications close April 2 2026"),
            vec!["April 2 2026"]
        );
        assert_eq!(extract_deadlines("SUBMIT BY June 30, 2025"), vec!["June 30, 2025"]);
    }

    #[test]
    fn test_keyword_numeric() {
        assert_eq!(extract_deadlines("Due date: 15/03/2025"), vec!["15/03/2025"]);
        assert_eq!(extract_deadlines("closing date 1-9-25"), vec!["1-9-25"]);
    }

    #[test]
    fn test_bare_day_month_year() {
        assert_eq!(
            extract_deadlines("The workshop is on 3 October 2025 in Nairobi."),
            vec!["3 October 2025"]
        );
    }

    #[test]
    fn test_first_seen_order_and_dedup() {
        let text = "Deadline: May 1, 2025. Reminder: deadline May 1, 2025. \
                    Kickoff 12 June 2025, review 12 June 2025, due date: 01/07/2025";
        assert_eq!(
            extract_deadlines(text),
            vec!["May 1, 2025", "01/07/2025", "12 June 2025"]
        );
    }

    #[test]
    fn test_truncated_to_five() {
        let text = "1 January 2025 2 January 2025 3 January 2025 \
                    4 January 2025 5 January 2025 6 January 2025";
        let deadlines = extract_deadlines(text);
        assert_eq!(deadlines.len(), 5);
        assert_eq!(deadlines[0], "1 January 2025");
        assert_eq!(deadlines[4], "5 January 2025");
    }

    #[test]
    fn test_no_match() {
        assert!(extract_deadlines("").is_empty());
        assert!(extract_deadlines("Rolling submissions accepted.").is_empty());
    }
}
