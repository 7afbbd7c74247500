//! Utility functions for error handling
//!
//! Helpers that attach the offending path to IO failures.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, VitalStatusError};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(VitalStatusError::NotFound(path.to_path_buf()));
    }

    if !path.is_file() {
        return Err(VitalStatusError::NotAFile(path.to_path_buf()));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::NotFound => {
                "File not found - it may have been deleted during operation".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };

        VitalStatusError::Io {
            path: path.to_path_buf(),
            context,
            source: e,
        }
    })
}
