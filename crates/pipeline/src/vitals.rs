//! Vitals monitoring cycle.
//!
//! One call to [`VitalsPipeline::run_cycle`] takes a validated reading and:
//!
//! 1. asks the text generator for a clinical explanation (narration),
//! 2. evaluates the reading against the fixed thresholds,
//! 3. if anything is abnormal, composes and dispatches an alert.
//!
//! Narration and evaluate+alert are independent and run concurrently; both
//! results land in the returned [`CycleReport`]. The pipeline keeps no state
//! between cycles, so every abnormal reading alerts again.

use std::sync::Arc;

use medibot_core::alert::{compose, Finding};
use medibot_core::prompts;
use medibot_core::thresholds::evaluate;
use medibot_core::vitals::VitalReading;
use medibot_events::{AlertDispatcher, DeliveryOutcome};
use medibot_llm::TextGenerator;
use uuid::Uuid;

use crate::error::NarrationError;

/// What happened on the alerting side of a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertOutcome {
    /// The reading was normal; nothing was sent.
    NotTriggered,
    Delivered,
    /// An alert was composed but could not be delivered.
    Failed(String),
}

impl From<DeliveryOutcome> for AlertOutcome {
    fn from(outcome: DeliveryOutcome) -> Self {
        match outcome {
            DeliveryOutcome::Delivered => Self::Delivered,
            DeliveryOutcome::Failed(reason) => Self::Failed(reason),
        }
    }
}

/// Everything a caller needs to show the operator after one cycle.
#[derive(Debug)]
pub struct CycleReport {
    /// Correlates log lines for this cycle.
    pub cycle_id: Uuid,
    pub reading: VitalReading,
    /// Narration text, or why it could not be obtained.
    pub narration: Result<String, NarrationError>,
    /// Findings in evaluation order; empty for a normal reading.
    pub findings: Vec<Finding>,
    pub alert: AlertOutcome,
}

/// Orchestrates narration, threshold evaluation, and alert dispatch.
pub struct VitalsPipeline {
    generator: Arc<dyn TextGenerator>,
    dispatcher: AlertDispatcher,
    destination: String,
}

impl VitalsPipeline {
    /// * `generator`   - text-generation service used for narration.
    /// * `dispatcher`  - delivers alerts; already owns its channel.
    /// * `destination` - fixed alert destination identifier.
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        dispatcher: AlertDispatcher,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            dispatcher,
            destination: destination.into(),
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Run one full cycle for `reading`. Never fails; partial failures are
    /// recorded in the report.
    pub async fn run_cycle(&self, reading: VitalReading) -> CycleReport {
        let cycle_id = Uuid::new_v4();
        tracing::info!(
            %cycle_id,
            spo2 = reading.spo2(),
            temperature = reading.temperature(),
            heart_rate = reading.heart_rate(),
            "Vitals cycle started",
        );

        let (narration, (findings, alert)) =
            tokio::join!(self.narrate(&reading), self.evaluate_and_alert(&reading));

        if let Err(e) = &narration {
            tracing::warn!(%cycle_id, error = %e, "Narration failed");
        }
        tracing::info!(
            %cycle_id,
            findings = findings.len(),
            alert = ?alert,
            "Vitals cycle complete",
        );

        CycleReport {
            cycle_id,
            reading,
            narration,
            findings,
            alert,
        }
    }

    async fn narrate(&self, reading: &VitalReading) -> Result<String, NarrationError> {
        let prompt = prompts::vitals_narration(reading);
        Ok(self.generator.generate(&prompt).await?)
    }

    async fn evaluate_and_alert(&self, reading: &VitalReading) -> (Vec<Finding>, AlertOutcome) {
        let findings = evaluate(reading);
        for finding in &findings {
            tracing::debug!(category = %finding.category, value = finding.value, "Abnormal vital");
        }

        let alert: AlertOutcome = match compose(&findings) {
            Some(message) => self
                .dispatcher
                .dispatch(&message, &self.destination)
                .await
                .into(),
            None => AlertOutcome::NotTriggered,
        };

        (findings, alert)
    }
}
