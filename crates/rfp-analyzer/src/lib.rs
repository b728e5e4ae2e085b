//! rfp-analyzer: heuristic analysis of RFP and grant solicitation documents
//!
//! A document is normalized to plain text (PDF, Word or plain text), scanned
//! for funding amounts, deadlines, focus areas and eligibility criteria,
//! assembled into an [`AnalysisResult`], and posted to a webhook.

pub mod analysis;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod extraction;
pub mod ingestion;
pub mod pipeline;
pub mod source;
pub mod types;

pub use config::{AnalyzerConfig, JobConfig, WebhookTarget};
pub use error::{Error, Result};
pub use pipeline::{AnalysisPipeline, PipelineOutput};
pub use types::{AnalysisResult, ContentKind, RawDocument};
