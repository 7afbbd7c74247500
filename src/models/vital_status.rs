//! Validated vital status records
//!
//! Once a row has been validated it can only take one of three shapes: alive,
//! dead with complete death information, or lost to follow-up.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::cause_of_death::CauseOfDeath;
use crate::models::types::{AgeAtDeath, PatientId, YearOfDeath};

/// Death information for a deceased patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeathInfo {
    pub year_of_death: YearOfDeath,
    pub age_at_death: AgeAtDeath,
    pub cause_of_death: CauseOfDeath,
}

impl DeathInfo {
    #[must_use]
    pub const fn new(
        year_of_death: YearOfDeath,
        age_at_death: AgeAtDeath,
        cause_of_death: CauseOfDeath,
    ) -> Self {
        Self {
            year_of_death,
            age_at_death,
            cause_of_death,
        }
    }
}

/// Vital status of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum VitalStatus {
    /// Patient is alive
    Alive,
    /// Patient has died
    Dead(DeathInfo),
    /// Patient can no longer be followed
    #[serde(rename = "Lost to follow-up")]
    LostToFollowUp,
}

impl VitalStatus {
    /// Get the death information, if the patient has died
    #[must_use]
    pub const fn death_info(&self) -> Option<&DeathInfo> {
        match self {
            Self::Dead(info) => Some(info),
            Self::Alive | Self::LostToFollowUp => None,
        }
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alive => f.write_str("Alive"),
            Self::Dead(info) => write!(
                f,
                "Dead ({}, aged {}, {})",
                info.year_of_death, info.age_at_death, info.cause_of_death
            ),
            Self::LostToFollowUp => f.write_str("Lost to follow-up"),
        }
    }
}

/// A validated vital status record for one patient
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientVitalStatus {
    pub patient_id: PatientId,
    pub vital_status: VitalStatus,
}

impl PatientVitalStatus {
    #[must_use]
    pub const fn new(patient_id: PatientId, vital_status: VitalStatus) -> Self {
        Self {
            patient_id,
            vital_status,
        }
    }
}

impl fmt::Display for PatientVitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.patient_id, self.vital_status)
    }
}
