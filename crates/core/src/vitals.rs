//! Vital sign readings and operator input validation.

use serde::Serialize;

use crate::error::InputError;
use crate::vital_names::{VITAL_HEART_RATE, VITAL_SPO2, VITAL_TEMPERATURE};

/// One batch of SpO2, temperature, and heart-rate measurements.
///
/// Immutable once built. Values are not range-checked: the threshold
/// evaluator classifies whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VitalReading {
    spo2: f64,
    temperature: f64,
    heart_rate: f64,
}

impl VitalReading {
    /// Build a reading from already-numeric values.
    ///
    /// Callers must pass finite values: a `NaN` compares false against every
    /// bound and would evaluate as normal. Use [`VitalReading::parse`] for
    /// untrusted input.
    pub fn new(spo2: f64, temperature: f64, heart_rate: f64) -> Self {
        debug_assert!(
            spo2.is_finite() && temperature.is_finite() && heart_rate.is_finite(),
            "vital reading values must be finite"
        );
        Self {
            spo2,
            temperature,
            heart_rate,
        }
    }

    /// Build a reading from raw operator input.
    ///
    /// Each field is trimmed and parsed as `f64`. Text that is not a number,
    /// and numbers that are not finite (`NaN`, `inf`), are rejected with the
    /// name of the first offending field.
    pub fn parse(spo2: &str, temperature: &str, heart_rate: &str) -> Result<Self, InputError> {
        Ok(Self {
            spo2: parse_field(VITAL_SPO2, spo2)?,
            temperature: parse_field(VITAL_TEMPERATURE, temperature)?,
            heart_rate: parse_field(VITAL_HEART_RATE, heart_rate)?,
        })
    }

    /// Oxygen saturation, percent.
    pub fn spo2(&self) -> f64 {
        self.spo2
    }

    /// Body temperature, degrees Celsius.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Heart rate, beats per minute.
    pub fn heart_rate(&self) -> f64 {
        self.heart_rate
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| InputError::NotNumeric {
        field,
        raw: trimmed.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NotFinite {
            field,
            raw: trimmed.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_accepts_padded_numbers() {
        let reading = VitalReading::parse(" 97 ", "36.6\n", "72.0").unwrap();
        assert_eq!(reading, VitalReading::new(97.0, 36.6, 72.0));
    }

    #[test]
    fn parse_tolerates_out_of_range_values() {
        let reading = VitalReading::parse("140", "-3", "0").unwrap();
        assert_eq!(reading.spo2(), 140.0);
        assert_eq!(reading.temperature(), -3.0);
        assert_eq!(reading.heart_rate(), 0.0);
    }

    #[test]
    fn parse_rejects_non_numeric_spo2() {
        let err = VitalReading::parse("ninety", "36.6", "72").unwrap_err();
        assert_matches!(
            err,
            InputError::NotNumeric { field: VITAL_SPO2, ref raw } if raw == "ninety"
        );
    }

    #[test]
    fn parse_reports_first_invalid_field() {
        let err = VitalReading::parse("97", "hot", "fast").unwrap_err();
        assert_eq!(err.field(), VITAL_TEMPERATURE);
    }

    #[test]
    fn parse_rejects_empty_heart_rate() {
        let err = VitalReading::parse("97", "36.6", "   ").unwrap_err();
        assert_matches!(err, InputError::NotNumeric { field: VITAL_HEART_RATE, .. });
    }

    #[test]
    fn parse_rejects_non_finite_values() {
        assert_matches!(
            VitalReading::parse("NaN", "36.6", "72"),
            Err(InputError::NotFinite { field: VITAL_SPO2, .. })
        );
        assert_matches!(
            VitalReading::parse("97", "inf", "72"),
            Err(InputError::NotFinite { field: VITAL_TEMPERATURE, .. })
        );
    }

    #[test]
    fn input_error_display_names_field_and_text() {
        let err = VitalReading::parse("97", "36.6", "abc").unwrap_err();
        assert_eq!(err.to_string(), "Invalid heart rate value \"abc\": not a number");
    }

    #[test]
    fn reading_serializes_with_field_names() {
        let json = serde_json::to_value(VitalReading::new(97.0, 36.6, 72.0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "spo2": 97.0, "temperature": 36.6, "heart_rate": 72.0 })
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "must be finite")]
    fn new_rejects_nan_in_debug_builds() {
        VitalReading::new(f64::NAN, 36.6, 72.0);
    }
}
