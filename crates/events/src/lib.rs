//! MediBot alert delivery.
//!
//! - [`NotificationChannel`]: the outbound "send this text to that
//!   destination" capability.
//! - [`AlertDispatcher`]: single best-effort delivery attempt that turns
//!   every failure into a [`DeliveryOutcome::Failed`].
//! - [`delivery`]: concrete channels (webhook relay, email, log).

pub mod channel;
pub mod delivery;
pub mod dispatcher;

pub use channel::{ChannelError, NotificationChannel};
pub use delivery::email::{EmailChannel, EmailConfig};
pub use delivery::log::LogChannel;
pub use delivery::webhook::WebhookChannel;
pub use dispatcher::{AlertDispatcher, DeliveryOutcome};
