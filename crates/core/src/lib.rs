//! MediBot domain logic.
//!
//! Everything in this crate is pure: no network, no console, no clock
//! except for exchange timestamps. The vitals rule engine, alert composer,
//! conversation log, and prompt builders live here so they can be tested in
//! isolation from the language model and the messaging channels.

pub mod alert;
pub mod channels;
pub mod conversation;
pub mod error;
pub mod prompts;
pub mod thresholds;
pub mod types;
pub mod vital_names;
pub mod vitals;
