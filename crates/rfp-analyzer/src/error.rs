//! Error types for the analyzer

use thiserror::Error;

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Analyzer errors
///
/// Only errors raised before text extraction starts, or while delivering the
/// finished record, ever reach the caller. Everything in between is absorbed
/// by fallbacks.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document could not be found by the document source
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// File parsing error, absorbed by the text extractor
    #[error("Failed to parse {format} document: {message}")]
    FileParse { format: String, message: String },

    /// Transport-level failure talking to the webhook endpoint
    #[error("Webhook delivery to {url} failed: {source}")]
    WebhookDelivery {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a file parse error
    pub fn file_parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileParse {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Create a webhook delivery error
    pub fn webhook_delivery(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::WebhookDelivery {
            url: url.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error aborts the pipeline after analysis completed
    pub fn is_delivery_failure(&self) -> bool {
        matches!(self, Self::WebhookDelivery { .. })
    }
}
