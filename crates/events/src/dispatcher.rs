//! Best-effort alert dispatch with failure isolation.
//!
//! [`AlertDispatcher`] makes one delivery attempt per alert through a
//! [`NotificationChannel`]. Channel errors, timeouts, and panics inside the
//! channel all come back as [`DeliveryOutcome::Failed`]; nothing propagates
//! to the caller.

use std::sync::Arc;
use std::time::Duration;

use medibot_core::alert::AlertMessage;

use crate::channel::NotificationChannel;

/// Default upper bound on a single delivery attempt.
pub const DEFAULT_DELIVERY_TIMEOUT: Duration = Duration::from_secs(15);

/// Result of one dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    /// Delivery did not happen; the reason is operator-readable.
    Failed(String),
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// Sends composed alerts through a single configured channel.
#[derive(Clone)]
pub struct AlertDispatcher {
    channel: Arc<dyn NotificationChannel>,
    timeout: Duration,
}

impl AlertDispatcher {
    pub fn new(channel: Arc<dyn NotificationChannel>) -> Self {
        Self {
            channel,
            timeout: DEFAULT_DELIVERY_TIMEOUT,
        }
    }

    /// Override the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn channel_name(&self) -> &'static str {
        self.channel.name()
    }

    /// Deliver `message` to `destination` once.
    ///
    /// Never returns an error: every failure is logged and reported as
    /// [`DeliveryOutcome::Failed`].
    pub async fn dispatch(&self, message: &AlertMessage, destination: &str) -> DeliveryOutcome {
        let channel = Arc::clone(&self.channel);
        let channel_name = channel.name();
        let attempt_message = message.clone();
        let attempt_destination = destination.to_string();
        let timeout = self.timeout;

        // Run the attempt on its own task so a panicking channel is contained.
        let attempt = tokio::spawn(async move {
            tokio::time::timeout(
                timeout,
                channel.deliver(&attempt_destination, &attempt_message),
            )
            .await
        });

        let outcome = match attempt.await {
            Ok(Ok(Ok(()))) => DeliveryOutcome::Delivered,
            Ok(Ok(Err(e))) => DeliveryOutcome::Failed(e.to_string()),
            Ok(Err(_elapsed)) => DeliveryOutcome::Failed(format!(
                "delivery timed out after {}s",
                timeout.as_secs_f64()
            )),
            Err(join_err) => DeliveryOutcome::Failed(format!("delivery task aborted: {join_err}")),
        };

        match &outcome {
            DeliveryOutcome::Delivered => {
                tracing::info!(channel = channel_name, to = destination, "Alert delivered");
            }
            DeliveryOutcome::Failed(reason) => {
                tracing::error!(
                    channel = channel_name,
                    to = destination,
                    error = %reason,
                    "Alert delivery failed"
                );
            }
        }

        outcome
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use medibot_core::alert::{compose, Finding, FindingCategory};

    use super::*;
    use crate::channel::ChannelError;

    #[derive(Default)]
    struct RecordingChannel {
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl NotificationChannel for RecordingChannel {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn deliver(
            &self,
            destination: &str,
            message: &AlertMessage,
        ) -> Result<(), ChannelError> {
            self.sent
                .lock()
                .unwrap()
                .push((destination.to_string(), message.to_string()));
            Ok(())
        }
    }

    struct FailingChannel;

    #[async_trait]
    impl NotificationChannel for FailingChannel {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn deliver(&self, _: &str, _: &AlertMessage) -> Result<(), ChannelError> {
            Err(ChannelError::Other("relay unreachable".to_string()))
        }
    }

    struct SlowChannel;

    #[async_trait]
    impl NotificationChannel for SlowChannel {
        fn name(&self) -> &'static str {
            "slow"
        }

        async fn deliver(&self, _: &str, _: &AlertMessage) -> Result<(), ChannelError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(())
        }
    }

    struct PanickingChannel;

    #[async_trait]
    impl NotificationChannel for PanickingChannel {
        fn name(&self) -> &'static str {
            "panicking"
        }

        async fn deliver(&self, _: &str, _: &AlertMessage) -> Result<(), ChannelError> {
            panic!("provider SDK blew up");
        }
    }

    fn sample_message() -> AlertMessage {
        compose(&[Finding {
            category: FindingCategory::LowSpo2,
            value: 88.0,
            description: "SpO2 is low at 88%, indicating potential hypoxemia.".to_string(),
        }])
        .unwrap()
    }

    #[tokio::test]
    async fn successful_delivery_reaches_channel_once() {
        let channel = Arc::new(RecordingChannel::default());
        let dispatcher = AlertDispatcher::new(channel.clone());

        let outcome = dispatcher.dispatch(&sample_message(), "+15550100").await;

        assert_eq!(outcome, DeliveryOutcome::Delivered);
        assert_eq!(dispatcher.channel_name(), "recording");
        let sent = channel.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "+15550100");
        assert_eq!(sent[0].1, sample_message().to_string());
    }

    #[tokio::test]
    async fn channel_error_becomes_failed_outcome() {
        let dispatcher = AlertDispatcher::new(Arc::new(FailingChannel));

        let outcome = dispatcher.dispatch(&sample_message(), "+15550100").await;

        assert_eq!(outcome, DeliveryOutcome::Failed("relay unreachable".to_string()));
        assert!(!outcome.is_delivered());
    }

    #[tokio::test]
    async fn slow_channel_times_out() {
        let dispatcher =
            AlertDispatcher::new(Arc::new(SlowChannel)).with_timeout(Duration::from_millis(50));

        let outcome = dispatcher.dispatch(&sample_message(), "+15550100").await;

        assert_matches!(outcome, DeliveryOutcome::Failed(reason) if reason.contains("timed out"));
    }

    #[tokio::test]
    async fn panicking_channel_is_contained() {
        let dispatcher = AlertDispatcher::new(Arc::new(PanickingChannel));

        let outcome = dispatcher.dispatch(&sample_message(), "+15550100").await;

        assert_matches!(outcome, DeliveryOutcome::Failed(reason) if reason.contains("aborted"));
    }
}
