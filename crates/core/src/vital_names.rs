//! Well-known vital sign names.
//!
//! Used as field names in input validation errors and as structured log
//! fields, so operators and logs refer to the same parameter the same way.

/// Peripheral oxygen saturation, percent.
pub const VITAL_SPO2: &str = "SpO2";

/// Body temperature, degrees Celsius.
pub const VITAL_TEMPERATURE: &str = "temperature";

/// Heart rate, beats per minute.
pub const VITAL_HEART_RATE: &str = "heart rate";
