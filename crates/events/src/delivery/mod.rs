//! Concrete notification channels.
//!
//! Each channel implements [`NotificationChannel`](crate::NotificationChannel)
//! for one provider. The binary picks one at startup from configuration.

pub mod email;
pub mod log;
pub mod webhook;
