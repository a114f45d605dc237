//! Log-only channel, used when no outbound provider is configured.

use async_trait::async_trait;
use medibot_core::alert::AlertMessage;
use medibot_core::channels::CHANNEL_LOG;

use crate::channel::{ChannelError, NotificationChannel};

/// Writes each alert to the application log at `warn` level.
#[derive(Debug, Default)]
pub struct LogChannel;

impl LogChannel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationChannel for LogChannel {
    fn name(&self) -> &'static str {
        CHANNEL_LOG
    }

    async fn deliver(&self, destination: &str, message: &AlertMessage) -> Result<(), ChannelError> {
        tracing::warn!(to = destination, alert = %message, "Vitals alert (log channel)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use medibot_core::alert::{compose, Finding, FindingCategory};

    use super::*;

    #[tokio::test]
    async fn log_channel_always_succeeds() {
        let message = compose(&[Finding {
            category: FindingCategory::Tachycardia,
            value: 130.0,
            description: "Heart rate is abnormal at 130 bpm (tachycardia).".to_string(),
        }])
        .unwrap();

        assert!(LogChannel::new().deliver("ward-3", &message).await.is_ok());
    }
}
