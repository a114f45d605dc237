//! Interactive console session.
//!
//! Generic over the input and output streams so the whole menu flow can be
//! driven from a byte script in tests. End of input behaves like `Q`.

use std::sync::Arc;

use medibot_core::vitals::VitalReading;
use medibot_llm::TextGenerator;
use medibot_pipeline::{AlertOutcome, CycleReport, EmergencySession, VitalsPipeline};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Sentinel that leaves the current mode.
const QUIT: &str = "quit";

const MODE_MENU: &str =
    "\nChoose mode:\n1 - Emergency Assistance\n2 - Vital Signs Monitoring\nQ - Quit";

/// Operator session: mode menu plus the two assistant modes.
pub struct Console<R, W> {
    input: R,
    output: W,
    generator: Arc<dyn TextGenerator>,
    pipeline: VitalsPipeline,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        input: R,
        output: W,
        generator: Arc<dyn TextGenerator>,
        pipeline: VitalsPipeline,
    ) -> Self {
        Self {
            input,
            output,
            generator,
            pipeline,
        }
    }

    /// Hand back the output stream (used by tests to inspect the transcript).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the operator quits or input ends.
    ///
    /// Only I/O errors on the console streams end the session early;
    /// assistant and delivery failures are shown and the session continues.
    pub async fn run(&mut self) -> std::io::Result<()> {
        self.say("Medical Assistant Bot").await?;

        loop {
            self.say(MODE_MENU).await?;
            let Some(choice) = self.ask("Enter mode number (or Q to quit): ").await? else {
                break;
            };

            match choice.to_lowercase().as_str() {
                "q" => break,
                "1" => self.emergency_mode().await?,
                "2" => self.vitals_mode().await?,
                _ => {
                    self.say("Invalid mode choice. Please select 1, 2, or Q.")
                        .await?
                }
            }
        }

        self.say("Exiting. Stay safe!").await
    }

    async fn emergency_mode(&mut self) -> std::io::Result<()> {
        self.say("\nEmergency Assistance Mode - type 'quit' to exit this mode.")
            .await?;
        tracing::info!("Emergency assistance session started");
        let mut session = EmergencySession::new(Arc::clone(&self.generator));

        loop {
            let Some(text) = self.ask("\nDescribe the emergency or respond: ").await? else {
                break;
            };
            if is_quit(&text) {
                break;
            }
            if text.is_empty() {
                continue;
            }

            match session.respond(&text).await {
                Ok(reply) => self.say(&format!("\nBot response:\n{reply}")).await?,
                Err(e) => {
                    tracing::warn!(error = %e, "Emergency reply failed");
                    self.say(&format!("\n{e}. Please try again.")).await?
                }
            }
        }

        tracing::info!(exchanges = session.log().len(), "Emergency assistance session ended");
        self.say("Exiting Emergency Assistance mode.").await
    }

    async fn vitals_mode(&mut self) -> std::io::Result<()> {
        self.say("\nVital Signs Monitoring Mode - type 'quit' to exit this mode.")
            .await?;

        while let Some((spo2, temperature, heart_rate)) = self.collect_vitals().await? {
            let reading = match VitalReading::parse(&spo2, &temperature, &heart_rate) {
                Ok(reading) => reading,
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected vitals input");
                    self.say(&format!("{e}. Please try again.")).await?;
                    continue;
                }
            };

            let report = self.pipeline.run_cycle(reading).await;
            self.show_report(&report).await?;
        }

        self.say("Exiting Vital Signs Monitoring mode.").await
    }

    /// Prompt for the three vitals in order. `None` if the operator quit or
    /// input ended at any prompt.
    async fn collect_vitals(&mut self) -> std::io::Result<Option<(String, String, String)>> {
        let Some(spo2) = self.ask_vital("Enter SpO2 (%) (or 'quit' to exit): ").await? else {
            return Ok(None);
        };
        let Some(temperature) = self.ask_vital("Enter Temperature (°C): ").await? else {
            return Ok(None);
        };
        let Some(heart_rate) = self.ask_vital("Enter Heart Rate (bpm): ").await? else {
            return Ok(None);
        };
        Ok(Some((spo2, temperature, heart_rate)))
    }

    async fn ask_vital(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        Ok(self.ask(prompt).await?.filter(|text| !is_quit(text)))
    }

    async fn show_report(&mut self, report: &CycleReport) -> std::io::Result<()> {
        match &report.narration {
            Ok(text) => self.say(&format!("\nBot response:\n{text}")).await?,
            Err(e) => self.say(&format!("\n{e}")).await?,
        }

        if report.findings.is_empty() {
            self.say("\nAll vitals are within normal ranges.").await?;
        } else {
            let mut summary = String::from("\nAbnormal vitals detected:");
            for finding in &report.findings {
                summary.push_str("\n- ");
                summary.push_str(&finding.description);
            }
            self.say(&summary).await?;
        }

        match &report.alert {
            AlertOutcome::NotTriggered => Ok(()),
            AlertOutcome::Delivered => {
                self.say(&format!("Alert sent to {}.", self.pipeline.destination()))
                    .await
            }
            AlertOutcome::Failed(reason) => {
                self.say(&format!("Alert could not be sent: {reason}")).await
            }
        }
    }

    /// Write `prompt` without a newline and read one trimmed line.
    /// `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD and left for
    /// input validation to reject.
    async fn ask(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    async fn say(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }
}

fn is_quit(text: &str) -> bool {
    text.eq_ignore_ascii_case(QUIT)
}
