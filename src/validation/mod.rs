//! Validation of raw vital status rows
//!
//! Field validators turn single strings into typed values, the row validator
//! combines them with the vital status category into one validated record.

pub mod diagnostics;
pub mod field;
pub mod row;

use crate::models::PatientVitalStatusInput;

pub use diagnostics::{DeathField, RowIssue, diagnose};
pub use field::{
    parse_unsigned_integer, validate_age_at_death, validate_cause_of_death,
    validate_year_of_death,
};
pub use row::{StatusCategory, validate_vital_status};

/// Reasons a value failed validation
///
/// The field-level variants are only produced by the individual field
/// validators. The row validator folds every failure into
/// [`ValidationError::InvalidVitalStatus`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Age at death is not a non-negative integer
    #[error("Not a valid age of death: {0}")]
    InvalidAgeAtDeath(String),

    /// Year of death is not a non-negative integer
    #[error("Not a valid year of death: {0}")]
    InvalidYearOfDeath(String),

    /// Cause of death is not one of the known causes
    #[error("Not a valid cause of death: {0}")]
    InvalidCauseOfDeath(String),

    /// The combination of status and death fields is not a valid row
    #[error("Invalid vital status: {0}")]
    InvalidVitalStatus(Box<PatientVitalStatusInput>),
}

impl ValidationError {
    /// Get the offending row for a row-level failure
    #[must_use]
    pub fn row(&self) -> Option<&PatientVitalStatusInput> {
        match self {
            Self::InvalidVitalStatus(row) => Some(row.as_ref()),
            Self::InvalidAgeAtDeath(_) | Self::InvalidYearOfDeath(_) | Self::InvalidCauseOfDeath(_) => {
                None
            }
        }
    }
}
