//! Cause of death classification
//!
//! The closed set of causes recorded for deceased patients. Textual forms are
//! matched exactly and case-sensitively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

/// Recorded cause of death
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CauseOfDeath {
    #[serde(rename = "Due to Cancer")]
    DueToCancer,
    #[serde(rename = "Due to Other Cause")]
    DueToOtherCause,
    #[serde(rename = "Probably Due to Cancer")]
    ProbablyDueToCancer,
    #[serde(rename = "Unknown Cause")]
    UnknownCause,
    #[serde(rename = "Unlikely Due to Cancer")]
    UnlikelyDueToCancer,
}

impl CauseOfDeath {
    /// Every cause, in declaration order
    pub const ALL: [Self; 5] = [
        Self::DueToCancer,
        Self::DueToOtherCause,
        Self::ProbablyDueToCancer,
        Self::UnknownCause,
        Self::UnlikelyDueToCancer,
    ];

    /// Match a raw string against the known causes
    ///
    /// Returns `None` for anything that is not exactly one of the textual forms.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Due to Cancer" => Some(Self::DueToCancer),
            "Due to Other Cause" => Some(Self::DueToOtherCause),
            "Probably Due to Cancer" => Some(Self::ProbablyDueToCancer),
            "Unknown Cause" => Some(Self::UnknownCause),
            "Unlikely Due to Cancer" => Some(Self::UnlikelyDueToCancer),
            _ => None,
        }
    }

    /// Get the textual form of this cause
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DueToCancer => "Due to Cancer",
            Self::DueToOtherCause => "Due to Other Cause",
            Self::ProbablyDueToCancer => "Probably Due to Cancer",
            Self::UnknownCause => "Unknown Cause",
            Self::UnlikelyDueToCancer => "Unlikely Due to Cancer",
        }
    }
}

impl fmt::Display for CauseOfDeath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CauseOfDeath {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::InvalidCauseOfDeath(s.to_string()))
    }
}
