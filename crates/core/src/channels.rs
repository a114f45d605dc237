//! Well-known notification channel name constants.
//!
//! These are the accepted values of the `ALERT_CHANNEL` setting and the
//! names reported by each `NotificationChannel` implementation in log lines.

/// Alert relayed to an instant-message gateway over HTTP.
pub const CHANNEL_WEBHOOK: &str = "webhook";

/// Alert delivered via SMTP.
pub const CHANNEL_EMAIL: &str = "email";

/// Alert written to the application log only.
pub const CHANNEL_LOG: &str = "log";
