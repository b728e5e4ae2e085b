//! Webhook delivery of analysis results

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::config::{WebhookConfig, WebhookTarget};
use crate::error::{Error, Result};
use crate::types::AnalysisResult;

/// Header carrying the shared secret
pub const WEBHOOK_SECRET_HEADER: &str = "x-webhook-secret";

/// What happened to a delivery attempt that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// No webhook configured; nothing was sent
    Skipped,
    /// The endpoint answered, with any status
    Delivered {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },
}

impl DeliveryOutcome {
    /// Whether a request reached the endpoint
    pub fn was_sent(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

/// Posts analysis results to a webhook, once, without retries
pub struct WebhookDispatcher {
    client: Client,
}

impl WebhookDispatcher {
    /// Create a dispatcher with the configured request timeout
    pub fn new(config: &WebhookConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Deliver a result
    ///
    /// Without a target this is a no-op. Any HTTP response counts as a
    /// completed delivery, including non-2xx statuses. Transport failures
    /// (timeouts, refused connections, DNS errors) are returned as
    /// [`Error::WebhookDelivery`].
    pub async fn deliver(
        &self,
        result: &AnalysisResult,
        target: Option<&WebhookTarget>,
    ) -> Result<DeliveryOutcome> {
        let Some(target) = target else {
            tracing::info!("No webhook URL configured, skipping callback");
            return Ok(DeliveryOutcome::Skipped);
        };

        let body = result.to_json()?;

        let response = self
            .client
            .post(&target.url)
            .header(CONTENT_TYPE, "application/json")
            .header(WEBHOOK_SECRET_HEADER, &target.secret)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Webhook call to {} failed: {}", target.url, e);
                Error::webhook_delivery(&target.url, e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Reading webhook response from {} failed: {}", target.url, e);
            Error::webhook_delivery(&target.url, e)
        })?;

        tracing::info!("Webhook response: {}", status);
        tracing::info!("Webhook body: {}", body);
        if !status.is_success() {
            tracing::warn!("Webhook endpoint answered with non-success status {}", status);
        }

        Ok(DeliveryOutcome::Delivered {
            status: status.as_u16(),
            body,
        })
    }
}
