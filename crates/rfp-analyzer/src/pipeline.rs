//! End-to-end analysis pipeline
//!
//! raw document → [`TextExtractor`] → [`InformationExtractor`] →
//! [`AnalysisAssembler`] → [`WebhookDispatcher`] → JSON output.
//!
//! Everything up to assembly absorbs its own failures. Only delivery can
//! abort a run once the document is in hand, and when it does the JSON
//! output is never produced.

use crate::analysis::AnalysisAssembler;
use crate::config::{AnalyzerConfig, JobConfig};
use crate::dispatch::{DeliveryOutcome, WebhookDispatcher};
use crate::error::Result;
use crate::extraction::InformationExtractor;
use crate::ingestion::TextExtractor;
use crate::source::DocumentSource;
use crate::types::{AnalysisResult, RawDocument};

/// Final product of a successful run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// The analysis record
    pub result: AnalysisResult,
    /// What happened to the webhook callback
    pub delivery: DeliveryOutcome,
    /// The record serialized as JSON, the job's return value
    pub json: String,
}

/// Wires the pipeline stages together
pub struct AnalysisPipeline {
    text_extractor: TextExtractor,
    information_extractor: InformationExtractor,
    assembler: AnalysisAssembler,
    dispatcher: WebhookDispatcher,
}

impl AnalysisPipeline {
    /// Build a pipeline from configuration
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            text_extractor: TextExtractor::new(&config.extraction),
            information_extractor: InformationExtractor::new(),
            assembler: AnalysisAssembler::new(),
            dispatcher: WebhookDispatcher::new(&config.webhook)?,
        })
    }

    /// Normalize, analyze and assemble; never fails
    pub fn analyze(&self, proposal_id: &str, doc: &RawDocument) -> AnalysisResult {
        let text = self.text_extractor.extract_document(doc);
        let fields = self.information_extractor.extract(&text);
        self.assembler.assemble(proposal_id, &text, fields)
    }

    /// Analyze a document and deliver the result
    pub async fn run(&self, job: &JobConfig, doc: &RawDocument) -> Result<PipelineOutput> {
        tracing::info!("Proposal ID: {}", job.proposal_id);

        let result = self.analyze(&job.proposal_id, doc);
        tracing::debug!("Analysis result: {}", result.to_json_pretty()?);

        let target = job.webhook_target();
        let delivery = self.dispatcher.deliver(&result, target.as_ref()).await?;

        let json = result.to_json()?;
        Ok(PipelineOutput {
            result,
            delivery,
            json,
        })
    }

    /// Fetch the job's document from a source, then [`run`](Self::run)
    pub async fn run_from_source(
        &self,
        job: &JobConfig,
        source: &dyn DocumentSource,
    ) -> Result<PipelineOutput> {
        tracing::info!("Analyzing document: {} (source: {})", job.storage_key, source.name());
        let doc = source
            .fetch(&job.storage_key, job.content_type.as_deref())
            .await?;
        self.run(job, &doc).await
    }
}
