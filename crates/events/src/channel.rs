//! The outbound notification capability.

use async_trait::async_trait;
use medibot_core::alert::AlertMessage;

use crate::delivery::email::EmailError;
use crate::delivery::webhook::WebhookError;

/// Error returned by a single delivery attempt.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error(transparent)]
    Webhook(#[from] WebhookError),

    #[error(transparent)]
    Email(#[from] EmailError),

    /// Failure from a channel without a dedicated error type.
    #[error("{0}")]
    Other(String),
}

/// Sends an alert message to a destination.
///
/// One implementation per messaging provider. Implementations make exactly
/// one attempt; retry policy, if any, belongs to the caller.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Short channel name used in log lines (see [`medibot_core::channels`]).
    fn name(&self) -> &'static str;

    /// Deliver `message` to `destination`.
    async fn deliver(&self, destination: &str, message: &AlertMessage) -> Result<(), ChannelError>;
}
