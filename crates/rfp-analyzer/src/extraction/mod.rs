//! Heuristic field extraction from normalized text
//!
//! Four independent analyzers, each a pure function of the text. None of
//! them fails; finding nothing yields an empty list.

mod deadlines;
mod eligibility;
mod focus_areas;
mod funding;

pub use deadlines::extract_deadlines;
pub use eligibility::{extract_eligibility, MAX_CRITERION_CHARS};
pub use focus_areas::{extract_focus_areas, FOCUS_AREA_VOCABULARY};
pub use funding::extract_funding_amounts;

/// Upper bound on entries returned by the bounded analyzers
pub const MAX_MATCHES: usize = 5;

/// Whitespace as used for trimming passages and counting words
///
/// Unicode whitespace plus the ASCII information separators U+001C..U+001F,
/// which the latin-1 fallback can produce from binary payloads.
pub fn is_text_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Count whitespace-separated words
pub fn count_words(text: &str) -> usize {
    text.split(is_text_whitespace).filter(|w| !w.is_empty()).count()
}

/// Outputs of the four analyzers for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    /// Funding amounts
    pub funding_amounts: Vec<String>,
    /// Deadline dates
    pub deadlines: Vec<String>,
    /// Focus areas
    pub focus_areas: Vec<String>,
    /// Eligibility passages
    pub eligibility_criteria: Vec<String>,
}

/// Runs every analyzer over a document's text
#[derive(Debug, Clone, Copy, Default)]
pub struct InformationExtractor;

impl InformationExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Run all four analyzers
    pub fn extract(&self, text: &str) -> ExtractedFields {
        let fields = ExtractedFields {
            funding_amounts: extract_funding_amounts(text),
            deadlines: extract_deadlines(text),
            focus_areas: extract_focus_areas(text),
            eligibility_criteria: extract_eligibility(text),
        };

        tracing::info!(
            "Extracted {} funding amounts, {} deadlines, {} focus areas, {} eligibility criteria",
            fields.funding_amounts.len(),
            fields.deadlines.len(),
            fields.focus_areas.len(),
            fields.eligibility_criteria.len()
        );

        fields
    }
}
