//! Batch validation of vital status rows
//!
//! Rows are independent, so a batch is an order-preserving map of
//! [`validate_vital_status`] over the input. Large batches are spread across
//! the rayon thread pool.

use std::fmt;
use std::path::Path;
use std::time::Instant;

use itertools::{Either, Itertools};
use rayon::prelude::*;

use crate::config::{ReaderConfig, ValidationConfig};
use crate::error::Result;
use crate::models::{PatientVitalStatus, PatientVitalStatusInput, VitalStatus};
use crate::reader::read_vital_status_csv;
use crate::utils::logging::{create_progress_bar, finish_progress_bar, log_validation_complete};
use crate::validation::{ValidationError, validate_vital_status};

/// Outcome of validating a single row
pub type RowResult = std::result::Result<PatientVitalStatus, ValidationError>;

/// Validate every row, returning one result per row in input order
#[must_use]
pub fn validate_all(rows: &[PatientVitalStatusInput], config: &ValidationConfig) -> Vec<RowResult> {
    let start = Instant::now();
    let pb = config
        .show_progress
        .then(|| create_progress_bar(rows.len() as u64, Some("Validating rows")));

    let validate = |row: &PatientVitalStatusInput| {
        let result = validate_vital_status(row);
        if let Some(pb) = &pb {
            pb.inc(1);
        }
        result
    };

    let results: Vec<RowResult> = if config.use_parallel(rows.len()) {
        log::debug!(
            "Validating {} rows in parallel with {} threads",
            rows.len(),
            rayon::current_num_threads()
        );
        rows.par_iter().map(validate).collect()
    } else {
        log::debug!("Validating {} rows sequentially", rows.len());
        rows.iter().map(validate).collect()
    };

    if let Some(pb) = &pb {
        finish_progress_bar(pb, Some("Validation complete"));
    }

    let invalid = results.iter().filter(|r| r.is_err()).count();
    log_validation_complete(results.len() - invalid, invalid, start.elapsed());

    results
}

/// Split results into valid records and errors, each keeping input order
#[must_use]
pub fn partition_results(
    results: Vec<RowResult>,
) -> (Vec<PatientVitalStatus>, Vec<ValidationError>) {
    results.into_iter().partition_map(|result| match result {
        Ok(record) => Either::Left(record),
        Err(err) => Either::Right(err),
    })
}

/// Read a vital status file and validate every row
pub fn load_and_validate(
    path: &Path,
    reader_config: &ReaderConfig,
    validation_config: &ValidationConfig,
) -> Result<Vec<RowResult>> {
    let rows = read_vital_status_csv(path, reader_config)?;
    Ok(validate_all(&rows, validation_config))
}

/// Counts of each outcome in a validated batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub total: usize,
    pub alive: usize,
    pub dead: usize,
    pub lost_to_follow_up: usize,
    pub invalid: usize,
}

impl ValidationSummary {
    /// Tally the outcomes of a batch
    #[must_use]
    pub fn from_results(results: &[RowResult]) -> Self {
        results.iter().fold(Self::default(), |mut summary, result| {
            summary.total += 1;
            match result {
                Ok(record) => match record.vital_status {
                    VitalStatus::Alive => summary.alive += 1,
                    VitalStatus::Dead(_) => summary.dead += 1,
                    VitalStatus::LostToFollowUp => summary.lost_to_follow_up += 1,
                },
                Err(_) => summary.invalid += 1,
            }
            summary
        })
    }

    /// Number of rows that validated successfully
    #[must_use]
    pub const fn valid(&self) -> usize {
        self.alive + self.dead + self.lost_to_follow_up
    }
}

impl fmt::Display for ValidationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vital Status Summary:")?;
        writeln!(f, "  Total Rows: {}", self.total)?;
        writeln!(f, "  Alive: {}", self.alive)?;
        writeln!(f, "  Dead: {}", self.dead)?;
        writeln!(f, "  Lost to Follow-up: {}", self.lost_to_follow_up)?;
        writeln!(f, "  Invalid: {}", self.invalid)
    }
}
