//! Build the runtime collaborators from [`AppConfig`].

use std::sync::Arc;

use medibot_events::delivery::webhook::{WebhookError, DEFAULT_REQUEST_TIMEOUT};
use medibot_events::{
    AlertDispatcher, EmailChannel, LogChannel, NotificationChannel, WebhookChannel,
};
use medibot_llm::{ChatCompletionsClient, GenerationError, TextGenerator};
use medibot_pipeline::VitalsPipeline;

use crate::config::{AppConfig, ChannelSettings};

/// Failure to construct an HTTP client at startup.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Failed to build text-generation client: {0}")]
    Generator(#[from] GenerationError),

    #[error("Failed to build webhook channel: {0}")]
    Webhook(#[from] WebhookError),
}

/// Instantiate the notification channel selected in `config`.
pub fn build_channel(config: &AppConfig) -> Result<Arc<dyn NotificationChannel>, WiringError> {
    let channel: Arc<dyn NotificationChannel> = match &config.channel {
        ChannelSettings::Webhook { relay_url } => {
            Arc::new(WebhookChannel::new(relay_url.clone(), DEFAULT_REQUEST_TIMEOUT)?)
        }
        ChannelSettings::Email(email) => Arc::new(EmailChannel::new(email.clone())),
        ChannelSettings::Log => Arc::new(LogChannel::new()),
    };
    Ok(channel)
}

/// Text generator plus the vitals pipeline that shares it.
pub fn build(config: &AppConfig) -> Result<(Arc<dyn TextGenerator>, VitalsPipeline), WiringError> {
    let generator: Arc<dyn TextGenerator> =
        Arc::new(ChatCompletionsClient::new(config.chat.clone())?);

    let channel = build_channel(config)?;
    let dispatcher = AlertDispatcher::new(channel).with_timeout(config.alert_timeout);
    tracing::info!(
        channel = dispatcher.channel_name(),
        timeout_secs = config.alert_timeout.as_secs(),
        "Alert channel configured",
    );
    let pipeline = VitalsPipeline::new(
        Arc::clone(&generator),
        dispatcher,
        config.alert_destination.clone(),
    );

    Ok((generator, pipeline))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        AppConfig::from_lookup(|key| map.get(key).map(|v| v.to_string())).unwrap()
    }

    #[test]
    fn builds_channel_named_after_setting() {
        let base = [("OPENAI_API_KEY", "sk-test"), ("ALERT_DESTINATION", "ward-3")];

        let log = build_channel(&config(&base)).unwrap();
        assert_eq!(log.name(), "log");

        let mut webhook_vars = base.to_vec();
        webhook_vars.push(("ALERT_CHANNEL", "webhook"));
        webhook_vars.push(("ALERT_WEBHOOK_URL", "http://relay.local/send"));
        assert_eq!(build_channel(&config(&webhook_vars)).unwrap().name(), "webhook");

        let mut email_vars = base.to_vec();
        email_vars.push(("ALERT_CHANNEL", "email"));
        email_vars.push(("SMTP_HOST", "smtp.example.com"));
        assert_eq!(build_channel(&config(&email_vars)).unwrap().name(), "email");
    }

    #[test]
    fn build_wires_destination_into_pipeline() {
        let (_generator, pipeline) = build(&config(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("ALERT_DESTINATION", "ward-3"),
        ]))
        .unwrap();
        assert_eq!(pipeline.destination(), "ward-3");
    }
}
