//! Logging utilities
//!
//! Standardized log lines for reading and validation operations.

use std::path::Path;
use std::time::Duration;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Past-tense verb describing the operation
/// * `path` - Path of the file that was operated on
/// * `items` - Number of items processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(operation: &str, path: &Path, items: usize, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!(
            "Successfully {} {} rows from {} in {:?}",
            operation,
            items,
            path.display(),
            duration
        );
    } else {
        log::info!("Successfully {} {} rows from {}", operation, items, path.display());
    }
}

/// Log the outcome of validating a batch of rows
pub fn log_validation_complete(valid: usize, invalid: usize, elapsed: Duration) {
    if invalid == 0 {
        log::info!("Validated {valid} rows in {elapsed:?}");
    } else {
        log::info!(
            "Validated {} rows in {:?}: {} valid, {} invalid",
            valid + invalid,
            elapsed,
            valid,
            invalid
        );
    }
}
