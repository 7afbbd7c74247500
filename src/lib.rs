//! A Rust library for parsing and validating patient vital status records.
//!
//! Raw CSV rows are validated one at a time into a strongly-typed
//! [`PatientVitalStatus`]. A row is either alive, dead with complete death
//! information, or lost to follow-up; every other combination is rejected
//! with an error that embeds the offending row.

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod reader;
pub mod utils;
pub mod validation;

// Core types
pub use config::{ReaderConfig, ValidationConfig};
pub use error::{Result, VitalStatusError};

// Domain model
pub use models::{
    AgeAtDeath, CauseOfDeath, DeathInfo, PatientId, PatientVitalStatus, PatientVitalStatusInput,
    VitalStatus, YearOfDeath,
};

// Validation
pub use validation::{
    DeathField, RowIssue, StatusCategory, ValidationError, diagnose, parse_unsigned_integer,
    validate_age_at_death, validate_cause_of_death, validate_vital_status, validate_year_of_death,
};

// Reading and batch validation
pub use loader::{RowResult, ValidationSummary, load_and_validate, partition_results, validate_all};
pub use reader::{read_vital_status_csv, read_vital_status_from};
