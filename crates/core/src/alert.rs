//! Vital sign findings and the alert message composed from them.

use std::fmt;

use serde::Serialize;

/// First line of every alert message.
pub const ALERT_HEADER: &str = "Critical Alert! Patient vitals show abnormalities:";

/// Kind of abnormality detected in a vital reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FindingCategory {
    /// SpO2 below the normal range.
    #[serde(rename = "low_spO2")]
    LowSpo2,
    /// Temperature outside the normal range on either side.
    #[serde(rename = "abnormal_temperature")]
    AbnormalTemperature,
    /// Heart rate below the normal range.
    #[serde(rename = "bradycardia")]
    Bradycardia,
    /// Heart rate above the normal range.
    #[serde(rename = "tachycardia")]
    Tachycardia,
}

impl FindingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LowSpo2 => "low_spO2",
            Self::AbnormalTemperature => "abnormal_temperature",
            Self::Bradycardia => "bradycardia",
            Self::Tachycardia => "tachycardia",
        }
    }
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single abnormal parameter found in a vital reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    /// What kind of abnormality this is.
    pub category: FindingCategory,
    /// The observed value that fell outside the normal range.
    pub value: f64,
    /// Human-readable sentence used as one line of the alert.
    pub description: String,
}

/// Alert text sent to the configured destination.
///
/// Built only by [`compose`]; there is no way to change it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage(String);

impl AlertMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Header line followed by one line per finding.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.0.lines()
    }
}

impl fmt::Display for AlertMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compose an alert from evaluator findings.
///
/// Returns `None` when there is nothing to report, which is what keeps
/// normal readings from producing notifications.
pub fn compose(findings: &[Finding]) -> Option<AlertMessage> {
    if findings.is_empty() {
        return None;
    }

    let mut text = String::from(ALERT_HEADER);
    for finding in findings {
        text.push('\n');
        text.push_str(&finding.description);
    }
    Some(AlertMessage(text))
}
