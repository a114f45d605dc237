//! MediBot orchestration.
//!
//! - [`VitalsPipeline`]: one vitals cycle (narrate, evaluate, alert).
//! - [`EmergencySession`]: two-phase emergency assistance conversation.
//!
//! Both take their collaborators by injection so tests can drive them with
//! fakes.

pub mod emergency;
pub mod error;
pub mod vitals;

pub use emergency::{EmergencySession, Phase};
pub use error::NarrationError;
pub use vitals::{AlertOutcome, CycleReport, VitalsPipeline};
