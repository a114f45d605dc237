/// Rejection of operator-entered vital sign text.
///
/// Raised before a [`VitalReading`](crate::vitals::VitalReading) exists; the
/// console reports it and retries the cycle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid {field} value {raw:?}: not a number")]
    NotNumeric { field: &'static str, raw: String },

    #[error("Invalid {field} value {raw:?}: must be a finite number")]
    NotFinite { field: &'static str, raw: String },
}

impl InputError {
    /// Name of the vital sign whose input was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotNumeric { field, .. } | Self::NotFinite { field, .. } => field,
        }
    }
}
