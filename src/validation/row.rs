//! Row validator
//!
//! Validity is a property of the whole row. The `Status` text selects a
//! category, and the death fields are then judged in the context of that
//! category: a well-formed age at death on a living patient is an error, not
//! a value to be dropped.

use crate::models::{
    AgeAtDeath, CauseOfDeath, DeathInfo, PatientId, PatientVitalStatus, PatientVitalStatusInput,
    VitalStatus, YearOfDeath,
};
use crate::validation::ValidationError;
use crate::validation::field::parse_unsigned_integer;

/// Category denoted by the raw `Status` text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Dead,
    Alive,
    LostToFollowUp,
    /// Any text other than the three recognised statuses
    Invalid,
}

impl StatusCategory {
    /// Categorise raw status text (exact, case-sensitive)
    #[must_use]
    pub fn of(status: &str) -> Self {
        match status {
            "Dead" => Self::Dead,
            "Alive" => Self::Alive,
            "Lost to follow-up" => Self::LostToFollowUp,
            _ => Self::Invalid,
        }
    }
}

/// Validate one raw row into a vital status record
///
/// Rules, first match wins:
/// 1. `Dead` with a parseable age, year and cause of death
/// 2. `Alive` with all three death fields empty
/// 3. `Lost to follow-up` with all three death fields empty
/// 4. anything else is [`ValidationError::InvalidVitalStatus`] carrying the row
pub fn validate_vital_status(
    input: &PatientVitalStatusInput,
) -> Result<PatientVitalStatus, ValidationError> {
    let status = match (
        StatusCategory::of(&input.status),
        parse_unsigned_integer(&input.age_at_death).map(AgeAtDeath::new),
        parse_unsigned_integer(&input.year_of_death).map(YearOfDeath::new),
        CauseOfDeath::parse(&input.cause_of_death),
    ) {
        (StatusCategory::Dead, Some(age), Some(year), Some(cause)) => {
            Some(VitalStatus::Dead(DeathInfo::new(year, age, cause)))
        }
        (StatusCategory::Alive, ..) if input.death_fields_empty() => Some(VitalStatus::Alive),
        (StatusCategory::LostToFollowUp, ..) if input.death_fields_empty() => {
            Some(VitalStatus::LostToFollowUp)
        }
        _ => None,
    };

    status
        .map(|vital_status| {
            PatientVitalStatus::new(PatientId::new(input.patient_id.as_str()), vital_status)
        })
        .ok_or_else(|| ValidationError::InvalidVitalStatus(Box::new(input.clone())))
}
