//! Raw, untrusted input rows
//!
//! One row of the vital status CSV before any validation has taken place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// CSV header for the patient identifier column
pub const PATIENT_ID_HEADER: &str = "Patient ID";
/// CSV header for the vital status column
pub const STATUS_HEADER: &str = "Vital Status";
/// CSV header for the age at death column
pub const AGE_AT_DEATH_HEADER: &str = "Age at Death";
/// CSV header for the year of death column
pub const YEAR_OF_DEATH_HEADER: &str = "Year of Death";
/// CSV header for the cause of death column
pub const CAUSE_OF_DEATH_HEADER: &str = "Cause of Death";

/// One raw row of vital status data
///
/// All fields are unconstrained and may be empty. Columns are matched by
/// header name, so the column order in the file does not matter. Fields
/// missing from a short record read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientVitalStatusInput {
    #[serde(rename = "Patient ID")]
    pub patient_id: String,
    #[serde(rename = "Vital Status")]
    pub status: String,
    #[serde(rename = "Age at Death")]
    pub age_at_death: String,
    #[serde(rename = "Year of Death")]
    pub year_of_death: String,
    #[serde(rename = "Cause of Death")]
    pub cause_of_death: String,
}

impl PatientVitalStatusInput {
    /// Build a row from its five raw fields
    #[must_use]
    pub fn new(
        patient_id: impl Into<String>,
        status: impl Into<String>,
        age_at_death: impl Into<String>,
        year_of_death: impl Into<String>,
        cause_of_death: impl Into<String>,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            status: status.into(),
            age_at_death: age_at_death.into(),
            year_of_death: year_of_death.into(),
            cause_of_death: cause_of_death.into(),
        }
    }

    /// Whether all three death fields are the empty string
    #[must_use]
    pub fn death_fields_empty(&self) -> bool {
        self.age_at_death.is_empty() && self.year_of_death.is_empty() && self.cause_of_death.is_empty()
    }
}

impl fmt::Display for PatientVitalStatusInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ PatientId = {:?}; Status = {:?}; AgeAtDeath = {:?}; YearOfDeath = {:?}; CauseOfDeath = {:?} }}",
            self.patient_id, self.status, self.age_at_death, self.year_of_death, self.cause_of_death
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_every_field() {
        let row = PatientVitalStatusInput::new("A000004", "Alive", "45", "2015", "Due to Cancer");
        assert_eq!(
            row.to_string(),
            r#"{ PatientId = "A000004"; Status = "Alive"; AgeAtDeath = "45"; YearOfDeath = "2015"; CauseOfDeath = "Due to Cancer" }"#
        );
    }

    #[test]
    fn test_death_fields_empty() {
        assert!(PatientVitalStatusInput::new("A1", "Alive", "", "", "").death_fields_empty());
        assert!(!PatientVitalStatusInput::new("A1", "Alive", "", "2015", "").death_fields_empty());
    }
}
