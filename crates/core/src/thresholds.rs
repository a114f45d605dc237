//! Threshold evaluation engine for patient vital signs.
//!
//! Pure logic. The caller decides whether an empty result means "no alert";
//! the evaluator only classifies. Bounds are inclusive: a value sitting
//! exactly on a boundary is normal.

use std::ops::RangeInclusive;

use crate::alert::{Finding, FindingCategory};
use crate::vitals::VitalReading;

/// Normal SpO2 range, percent.
pub const SPO2_NORMAL: RangeInclusive<f64> = 95.0..=100.0;

/// Normal body temperature range, degrees Celsius.
pub const TEMPERATURE_NORMAL: RangeInclusive<f64> = 36.1..=37.2;

/// Normal resting heart rate range, beats per minute.
pub const HEART_RATE_NORMAL: RangeInclusive<f64> = 60.0..=100.0;

/// Evaluate a reading and return its findings in evaluation order
/// (SpO2, temperature, heart rate).
///
/// Total over finite input. Physiologically implausible values are still
/// classified, never rejected.
pub fn evaluate(reading: &VitalReading) -> Vec<Finding> {
    let mut findings = Vec::new();

    // Only desaturation is alarming; readings above 100 are sensor noise.
    let spo2 = reading.spo2();
    if spo2 < *SPO2_NORMAL.start() {
        findings.push(Finding {
            category: FindingCategory::LowSpo2,
            value: spo2,
            description: format!("SpO2 is low at {spo2}%, indicating potential hypoxemia."),
        });
    }

    let temperature = reading.temperature();
    if temperature < *TEMPERATURE_NORMAL.start() || temperature > *TEMPERATURE_NORMAL.end() {
        findings.push(Finding {
            category: FindingCategory::AbnormalTemperature,
            value: temperature,
            description: format!(
                "Temperature is abnormal at {temperature}°C, which could indicate fever or hypothermia."
            ),
        });
    }

    let heart_rate = reading.heart_rate();
    let heart_rate_category = if heart_rate < *HEART_RATE_NORMAL.start() {
        Some(FindingCategory::Bradycardia)
    } else if heart_rate > *HEART_RATE_NORMAL.end() {
        Some(FindingCategory::Tachycardia)
    } else {
        None
    };
    if let Some(category) = heart_rate_category {
        findings.push(Finding {
            category,
            value: heart_rate,
            description: format!("Heart rate is abnormal at {heart_rate} bpm ({category})."),
        });
    }

    findings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
