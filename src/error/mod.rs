//! Error handling for reading and loading vital status data.
//!
//! Validation outcomes are not errors in this sense: an invalid row is an
//! ordinary value (see [`crate::validation::ValidationError`]). The types here
//! cover the ambient failures around validation, such as a missing file or a
//! malformed CSV stream.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for reading vital status files
#[derive(Debug, thiserror::Error)]
pub enum VitalStatusError {
    /// Error opening or reading a file
    #[error("IO error for {}: {context}: {source}", .path.display())]
    Io {
        /// Path of the file involved
        path: PathBuf,
        /// What was being attempted
        context: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// The path exists but does not point to a regular file
    #[error("Path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// The path does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A required CSV column is absent from the header row
    #[error("Missing column in header: {0}")]
    MissingColumn(String),

    /// Error tokenizing or deserializing CSV data
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Result type for vital status reading operations
pub type Result<T> = std::result::Result<T, VitalStatusError>;
