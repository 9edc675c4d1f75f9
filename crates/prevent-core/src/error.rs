//! Error types for risk calculation

use thiserror::Error;

use crate::domain::Field;

/// Rejection of a single patient record.
///
/// Both variants are user-input errors raised before any risk is computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// A continuous input lies outside its clinically valid range.
    #[error("{field} must be between its clinical bounds: got {value}, violated bound {bound}")]
    OutOfRange {
        /// The offending field.
        field: Field,
        /// The value that was offered.
        value: f64,
        /// The inclusive bound that was violated.
        bound: f64,
    },

    /// Sex designation is not one of the two recognized categories.
    #[error("Sex must be either 'male' or 'female', got '{0}'")]
    InvalidSex(String),
}

impl RiskError {
    /// Returns the field that failed range validation, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            RiskError::OutOfRange { field, .. } => Some(*field),
            RiskError::InvalidSex(_) => None,
        }
    }
}

/// Result type alias for risk calculation.
pub type Result<T> = std::result::Result<T, RiskError>;
