use std::time::Duration;

use medibot_core::channels::{CHANNEL_EMAIL, CHANNEL_LOG, CHANNEL_WEBHOOK};
use medibot_events::EmailConfig;
use medibot_llm::chat::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use medibot_llm::ChatConfig;

/// Default seconds to wait for a completion.
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;

/// Default seconds to wait for one alert delivery attempt.
const DEFAULT_ALERT_TIMEOUT_SECS: u64 = 15;

/// Startup configuration problem. Reported once, then the process exits.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Which outbound channel carries alerts.
#[derive(Debug, Clone)]
pub enum ChannelSettings {
    Webhook { relay_url: String },
    Email(EmailConfig),
    Log,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Text-generation endpoint, credentials, model, and timeout.
    pub chat: ChatConfig,
    /// The single fixed destination every alert is sent to.
    pub alert_destination: String,
    pub channel: ChannelSettings,
    /// Upper bound on one alert delivery attempt.
    pub alert_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Required     | Default                     |
    /// |----------------------|--------------|-----------------------------|
    /// | `OPENAI_API_KEY`     | yes          | —                           |
    /// | `LLM_BASE_URL`       | no           | `https://api.openai.com/v1` |
    /// | `LLM_MODEL`          | no           | `gpt-4o-mini`               |
    /// | `LLM_TIMEOUT_SECS`   | no           | `60`                        |
    /// | `ALERT_DESTINATION`  | yes          | —                           |
    /// | `ALERT_CHANNEL`      | no           | `log`                       |
    /// | `ALERT_WEBHOOK_URL`  | for webhook  | —                           |
    /// | `ALERT_TIMEOUT_SECS` | no           | `15`                        |
    /// | `SMTP_*`             | for email    | see [`EmailConfig`]         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied variable
    /// source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = get("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;
        let chat = ChatConfig {
            base_url: get("LLM_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            model: get("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: Duration::from_secs(parse_secs(
                "LLM_TIMEOUT_SECS",
                get("LLM_TIMEOUT_SECS"),
                DEFAULT_LLM_TIMEOUT_SECS,
            )?),
        };

        let alert_destination =
            get("ALERT_DESTINATION").ok_or(ConfigError::Missing("ALERT_DESTINATION"))?;

        let channel_name = get("ALERT_CHANNEL")
            .map(|c| c.to_lowercase())
            .unwrap_or_else(|| CHANNEL_LOG.to_string());
        let channel = match channel_name.as_str() {
            CHANNEL_WEBHOOK => ChannelSettings::Webhook {
                relay_url: get("ALERT_WEBHOOK_URL")
                    .ok_or(ConfigError::Missing("ALERT_WEBHOOK_URL"))?,
            },
            CHANNEL_EMAIL => ChannelSettings::Email(
                EmailConfig::from_lookup(&get).ok_or(ConfigError::Missing("SMTP_HOST"))?,
            ),
            CHANNEL_LOG => ChannelSettings::Log,
            _ => {
                return Err(ConfigError::Invalid {
                    name: "ALERT_CHANNEL",
                    expected: "one of webhook, email, log",
                    value: channel_name.clone(),
                })
            }
        };

        let alert_timeout = Duration::from_secs(parse_secs(
            "ALERT_TIMEOUT_SECS",
            get("ALERT_TIMEOUT_SECS"),
            DEFAULT_ALERT_TIMEOUT_SECS,
        )?);

        Ok(Self {
            chat,
            alert_destination,
            channel,
            alert_timeout,
        })
    }
}

fn parse_secs(name: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ConfigError::Invalid {
                name,
                expected: "a positive whole number of seconds",
                value,
            }),
        },
    }
}
