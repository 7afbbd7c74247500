//! Fine-grained diagnostics for invalid rows
//!
//! The row validator reports a single coarse error that embeds the whole row.
//! [`diagnose`] explains which fields caused it, without changing that outcome.

use std::fmt;

use crate::models::PatientVitalStatusInput;
use crate::models::input::{AGE_AT_DEATH_HEADER, CAUSE_OF_DEATH_HEADER, YEAR_OF_DEATH_HEADER};
use crate::validation::ValidationError;
use crate::validation::field::{
    validate_age_at_death, validate_cause_of_death, validate_year_of_death,
};
use crate::validation::row::StatusCategory;

/// The death-related fields of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeathField {
    AgeAtDeath,
    YearOfDeath,
    CauseOfDeath,
}

impl DeathField {
    /// Every death field, in model order
    pub const ALL: [Self; 3] = [Self::AgeAtDeath, Self::YearOfDeath, Self::CauseOfDeath];

    /// CSV header of the field
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::AgeAtDeath => AGE_AT_DEATH_HEADER,
            Self::YearOfDeath => YEAR_OF_DEATH_HEADER,
            Self::CauseOfDeath => CAUSE_OF_DEATH_HEADER,
        }
    }

    fn raw(self, input: &PatientVitalStatusInput) -> &str {
        match self {
            Self::AgeAtDeath => &input.age_at_death,
            Self::YearOfDeath => &input.year_of_death,
            Self::CauseOfDeath => &input.cause_of_death,
        }
    }

    fn validate(self, raw: &str) -> Result<(), ValidationError> {
        match self {
            Self::AgeAtDeath => validate_age_at_death(raw).map(drop),
            Self::YearOfDeath => validate_year_of_death(raw).map(drop),
            Self::CauseOfDeath => validate_cause_of_death(raw).map(drop),
        }
    }
}

impl fmt::Display for DeathField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// One reason a row is invalid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIssue {
    /// Status text is not one of the recognised statuses
    UnrecognisedStatus(String),
    /// A deceased patient is missing a death field
    MissingDeathField(DeathField),
    /// A deceased patient has a death field that does not parse
    InvalidDeathField(DeathField, ValidationError),
    /// A living or lost patient has a non-empty death field
    UnexpectedDeathField(DeathField),
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognisedStatus(status) => write!(f, "Unrecognised vital status: {status:?}"),
            Self::MissingDeathField(field) => write!(f, "{field} is required for a deceased patient"),
            Self::InvalidDeathField(_, err) => write!(f, "{err}"),
            Self::UnexpectedDeathField(field) => {
                write!(f, "{field} must be empty unless the patient is dead")
            }
        }
    }
}

/// List every issue that makes `input` invalid
///
/// The result is empty exactly when
/// [`validate_vital_status`](crate::validation::validate_vital_status) accepts the row.
#[must_use]
pub fn diagnose(input: &PatientVitalStatusInput) -> Vec<RowIssue> {
    match StatusCategory::of(&input.status) {
        StatusCategory::Invalid => vec![RowIssue::UnrecognisedStatus(input.status.clone())],
        StatusCategory::Dead => DeathField::ALL
            .into_iter()
            .filter_map(|field| {
                let raw = field.raw(input);
                if raw.is_empty() {
                    Some(RowIssue::MissingDeathField(field))
                } else {
                    field
                        .validate(raw)
                        .err()
                        .map(|err| RowIssue::InvalidDeathField(field, err))
                }
            })
            .collect(),
        StatusCategory::Alive | StatusCategory::LostToFollowUp => DeathField::ALL
            .into_iter()
            .filter(|field| !field.raw(input).is_empty())
            .map(RowIssue::UnexpectedDeathField)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_rows_have_no_issues() {
        assert!(diagnose(&PatientVitalStatusInput::new("A", "Alive", "", "", "")).is_empty());
        assert!(
            diagnose(&PatientVitalStatusInput::new("A", "Dead", "60", "2017", "Due to Cancer"))
                .is_empty()
        );
    }

    #[test]
    fn test_dead_missing_and_invalid_fields() {
        let issues = diagnose(&PatientVitalStatusInput::new("A", "Dead", "", "year", "Due to Cancer"));
        assert_eq!(
            issues,
            vec![
                RowIssue::MissingDeathField(DeathField::AgeAtDeath),
                RowIssue::InvalidDeathField(
                    DeathField::YearOfDeath,
                    ValidationError::InvalidYearOfDeath("year".to_string())
                ),
            ]
        );
        assert_eq!(issues[0].to_string(), "Age at Death is required for a deceased patient");
        assert_eq!(issues[1].to_string(), "Not a valid year of death: year");
    }

    #[test]
    fn test_alive_with_death_fields() {
        let issues = diagnose(&PatientVitalStatusInput::new("A", "Alive", "45", "2015", ""));
        assert_eq!(
            issues,
            vec![
                RowIssue::UnexpectedDeathField(DeathField::AgeAtDeath),
                RowIssue::UnexpectedDeathField(DeathField::YearOfDeath),
            ]
        );
    }

    #[test]
    fn test_unrecognised_status() {
        let issues = diagnose(&PatientVitalStatusInput::new("A", "Unknown", "", "", ""));
        assert_eq!(issues, vec![RowIssue::UnrecognisedStatus("Unknown".to_string())]);
    }
}
