//! Eligibility passage extraction

use once_cell::sync::Lazy;
use regex::Regex;

use super::{is_text_whitespace, MAX_MATCHES};

/// Longest eligibility passage kept, in characters
pub const MAX_CRITERION_CHARS: usize = 500;

static ELIGIBILITY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Eligibility: ... plus up to five following lines
        r"(?i)(?:eligib(?:le|ility)|qualif(?:y|ication|ied))[:\s]*([^\n]+(?:\n[^\n]+){0,5})",
        // Who can apply: ... plus up to five following lines
        r"(?i)(?:who (?:can|may|should) apply)[:\s]*([^\n]+(?:\n[^\n]+){0,5})",
        // Applicants must ... plus up to three following lines
        r"(?i)(?:applicants? must)[:\s]*([^\n]+(?:\n[^\n]+){0,3})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid eligibility regex"))
    .collect()
});

/// Extract eligibility passages
///
/// Each passage is trimmed and cut to [`MAX_CRITERION_CHARS`]; blank
/// passages are dropped. Families are concatenated in order and the result
/// cut to five entries.
pub fn extract_eligibility(text: &str) -> Vec<String> {
    ELIGIBILITY_PATTERNS
        .iter()
        .flat_map(|re| {
            re.captures_iter(text).filter_map(|caps| {
                caps.get(1)
                    .map(|m| truncate_chars(m.as_str().trim_matches(is_text_whitespace)))
            })
        })
        .filter(|criterion| !criterion.is_empty())
        .take(MAX_MATCHES)
        .collect()
}

fn truncate_chars(text: &str) -> String {
    match text.char_indices().nth(MAX_CRITERION_CHARS) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
