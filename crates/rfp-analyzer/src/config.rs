//! Configuration for the analyzer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

/// Main analyzer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Text extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
    /// Webhook delivery configuration
    #[serde(default)]
    pub webhook: WebhookConfig,
    /// Local document storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file; missing sections use defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

/// PDF text extraction backend
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PdfBackend {
    /// Text-layer extraction with pdf-extract
    #[default]
    #[serde(rename = "pdf-extract")]
    PdfExtract,
    /// Layout-based per-page extraction with lopdf
    #[serde(rename = "lopdf")]
    Lopdf,
}

/// Text extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Strategy used for PDF documents (default: pdf-extract)
    #[serde(default)]
    pub pdf_backend: PdfBackend,
    /// Try the lopdf layout strategy when the configured backend fails (default: true)
    #[serde(default = "default_layout_fallback")]
    pub layout_fallback: bool,
    /// Upper bound for a single pdf-extract run in seconds (default: 60)
    #[serde(default = "default_pdf_timeout")]
    pub pdf_timeout_secs: u64,
    /// Characters of extracted text shown in debug logs (default: 500)
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

fn default_layout_fallback() -> bool { true }
fn default_pdf_timeout() -> u64 { 60 }
fn default_preview_chars() -> usize { 500 }

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            pdf_backend: PdfBackend::default(),
            layout_fallback: true,
            pdf_timeout_secs: 60,
            preview_chars: 500,
        }
    }
}

impl ExtractionConfig {
    /// PDF extraction timeout as a duration
    pub fn pdf_timeout(&self) -> Duration {
        Duration::from_secs(self.pdf_timeout_secs)
    }
}

/// Webhook delivery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_webhook_timeout")]
    pub timeout_secs: u64,
}

fn default_webhook_timeout() -> u64 { 30 }

impl Default for WebhookConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl WebhookConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Local document storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory that storage keys are resolved against
    #[serde(default = "default_storage_root")]
    pub root: PathBuf,
}

fn default_storage_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_storage_root(),
        }
    }
}

/// Parameters of a single analysis job
///
/// Built once at the entry point and passed by reference; never mutated
/// while the pipeline runs.
#[derive(Clone, Default)]
pub struct JobConfig {
    /// Opaque proposal identifier, passed through to the result
    pub proposal_id: String,
    /// Key of the document in the document source
    pub storage_key: String,
    /// Content type override; guessed from the key when absent
    pub content_type: Option<String>,
    /// Webhook URL for the result callback
    pub webhook_url: Option<String>,
    /// Shared secret sent in the `x-webhook-secret` header
    pub webhook_secret: Option<String>,
}

impl JobConfig {
    /// Create a job without webhook delivery
    pub fn new(proposal_id: impl Into<String>, storage_key: impl Into<String>) -> Self {
        Self {
            proposal_id: proposal_id.into(),
            storage_key: storage_key.into(),
            ..Default::default()
        }
    }

    /// Set the webhook URL and secret
    pub fn with_webhook(mut self, url: impl Into<String>, secret: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self.webhook_secret = Some(secret.into());
        self
    }

    /// Webhook target, present only when both URL and secret are non-empty
    ///
    /// Values are taken as given: a whitespace-only URL is still a target and
    /// fails at delivery time.
    pub fn webhook_target(&self) -> Option<WebhookTarget> {
        let url = self.webhook_url.as_deref().unwrap_or("");
        let secret = self.webhook_secret.as_deref().unwrap_or("");
        if url.is_empty() || secret.is_empty() {
            return None;
        }
        Some(WebhookTarget {
            url: url.to_string(),
            secret: secret.to_string(),
        })
    }
}

impl fmt::Debug for JobConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobConfig")
            .field("proposal_id", &self.proposal_id)
            .field("storage_key", &self.storage_key)
            .field("content_type", &self.content_type)
            .field("webhook_url", &self.webhook_url)
            .field("webhook_secret", &self.webhook_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Where and how to deliver the analysis result
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookTarget {
    /// Endpoint URL
    pub url: String,
    /// Shared secret
    pub secret: String,
}

impl fmt::Debug for WebhookTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookTarget")
            .field("url", &self.url)
            .field("secret", &"<redacted>")
            .finish()
    }
}
