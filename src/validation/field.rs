//! Field validators
//!
//! Each function converts one raw string into one typed value. Parsing
//! reports absence with `None` and leaves the wording of any error to the
//! caller; the `validate_*` functions attach a field-specific message.

use crate::models::{AgeAtDeath, CauseOfDeath, YearOfDeath};
use crate::validation::ValidationError;

/// Parse a base-10 non-negative integer
///
/// Only ASCII digits are accepted: no sign, no surrounding whitespace. Values
/// that overflow `u32` yield `None`.
#[must_use]
pub fn parse_unsigned_integer(s: &str) -> Option<u32> {
    // `u32::from_str` would accept a leading '+'
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Validate an age at death, reporting the raw value on failure
#[must_use = "the validation outcome should be checked"]
pub fn validate_age_at_death(s: &str) -> Result<AgeAtDeath, ValidationError> {
    parse_unsigned_integer(s)
        .map(AgeAtDeath::new)
        .ok_or_else(|| ValidationError::InvalidAgeAtDeath(s.to_string()))
}

/// Validate a year of death, reporting the raw value on failure
#[must_use = "the validation outcome should be checked"]
pub fn validate_year_of_death(s: &str) -> Result<YearOfDeath, ValidationError> {
    parse_unsigned_integer(s)
        .map(YearOfDeath::new)
        .ok_or_else(|| ValidationError::InvalidYearOfDeath(s.to_string()))
}

/// Validate a cause of death against the known causes (exact match)
#[must_use = "the validation outcome should be checked"]
pub fn validate_cause_of_death(s: &str) -> Result<CauseOfDeath, ValidationError> {
    s.parse()
}
