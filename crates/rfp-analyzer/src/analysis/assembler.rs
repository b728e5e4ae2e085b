//! Assembly of the canonical analysis record

use chrono::{DateTime, Utc};

use crate::extraction::{count_words, ExtractedFields};
use crate::types::AnalysisResult;

/// Merges analyzer outputs and document statistics into an [`AnalysisResult`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisAssembler;

impl AnalysisAssembler {
    /// Create a new assembler
    pub fn new() -> Self {
        Self
    }

    /// Assemble a record stamped with the current UTC time
    pub fn assemble(&self, proposal_id: &str, text: &str, fields: ExtractedFields) -> AnalysisResult {
        self.assemble_at(proposal_id, text, fields, Utc::now())
    }

    /// Assemble a record with an explicit timestamp
    pub fn assemble_at(
        &self,
        proposal_id: &str,
        text: &str,
        fields: ExtractedFields,
        analyzed_at: DateTime<Utc>,
    ) -> AnalysisResult {
        let ExtractedFields {
            funding_amounts,
            deadlines,
            focus_areas,
            eligibility_criteria,
        } = fields;

        AnalysisResult {
            proposal_id: proposal_id.to_string(),
            funding_amounts,
            deadlines,
            focus_areas,
            eligibility_criteria,
            document_length: text.chars().count(),
            word_count: count_words(text),
            analyzed_at,
        }
    }
}
