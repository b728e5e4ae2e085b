//! Core types for the analyzer

pub mod analysis;
pub mod document;

pub use analysis::AnalysisResult;
pub use document::{ContentKind, RawDocument, DEFAULT_CONTENT_TYPE};
