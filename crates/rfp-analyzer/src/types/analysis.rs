//! The canonical analysis record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of analyzing one RFP document
///
/// Built once by [`AnalysisAssembler`](crate::analysis::AnalysisAssembler) and
/// never mutated afterwards. The serialized key set is the webhook contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Opaque proposal identifier
    pub proposal_id: String,
    /// Funding amounts, at most five, in pattern-family order
    pub funding_amounts: Vec<String>,
    /// Deadline dates, at most five, deduplicated
    pub deadlines: Vec<String>,
    /// Focus areas in vocabulary order
    pub focus_areas: Vec<String>,
    /// Eligibility passages, at most five, each at most 500 characters
    pub eligibility_criteria: Vec<String>,
    /// Character count of the normalized text
    pub document_length: usize,
    /// Whitespace-delimited token count of the normalized text
    pub word_count: usize,
    /// Assembly timestamp
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// Serialize to the JSON wire format
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON for logs
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Compare every field except the timestamp
    pub fn same_content(&self, other: &Self) -> bool {
        self.proposal_id == other.proposal_id
            && self.funding_amounts == other.funding_amounts
            && self.deadlines == other.deadlines
            && self.focus_areas == other.focus_areas
            && self.eligibility_criteria == other.eligibility_criteria
            && self.document_length == other.document_length
            && self.word_count == other.word_count
    }
}
