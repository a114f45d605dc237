//! Instant-message relay delivery over HTTP.
//!
//! [`WebhookChannel`] POSTs a JSON body `{ "to", "text", "sent_at" }` to a
//! relay URL (an instant-message gateway). A single attempt is made; any
//! non-2xx response is an error.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use medibot_core::alert::AlertMessage;
use medibot_core::channels::CHANNEL_WEBHOOK;

use crate::channel::{ChannelError, NotificationChannel};

/// Default HTTP request timeout for a single delivery attempt.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for webhook delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The relay returned a non-2xx status code.
    #[error("Webhook returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// WebhookChannel
// ---------------------------------------------------------------------------

/// Delivers alerts through an HTTP message relay.
pub struct WebhookChannel {
    client: reqwest::Client,
    relay_url: String,
}

impl WebhookChannel {
    /// Create a channel posting to `relay_url` with the given request timeout.
    pub fn new(relay_url: impl Into<String>, timeout: Duration) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            relay_url: relay_url.into(),
        })
    }

    pub fn relay_url(&self) -> &str {
        &self.relay_url
    }

    async fn try_send(&self, payload: &serde_json::Value) -> Result<(), WebhookError> {
        let response = self.client.post(&self.relay_url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(WebhookError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

/// JSON body posted to the relay.
pub fn relay_payload(destination: &str, message: &AlertMessage) -> serde_json::Value {
    serde_json::json!({
        "to": destination,
        "text": message.as_str(),
        "sent_at": Utc::now().to_rfc3339(),
    })
}

#[async_trait]
impl NotificationChannel for WebhookChannel {
    fn name(&self) -> &'static str {
        CHANNEL_WEBHOOK
    }

    async fn deliver(&self, destination: &str, message: &AlertMessage) -> Result<(), ChannelError> {
        let payload = relay_payload(destination, message);
        self.try_send(&payload).await?;
        tracing::info!(to = destination, url = %self.relay_url, "Alert relayed via webhook");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
