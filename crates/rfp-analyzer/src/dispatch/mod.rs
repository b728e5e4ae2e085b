//! Result delivery to the calling system

mod webhook;

pub use webhook::{DeliveryOutcome, WebhookDispatcher, WEBHOOK_SECRET_HEADER};
