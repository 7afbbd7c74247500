//! Configuration for reading and validating vital status data.

use std::fmt;

/// Configuration for the CSV reader
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Field delimiter
    pub delimiter: u8,
    /// Trim surrounding whitespace from headers and fields
    pub trim: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl fmt::Display for ReaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reader Configuration:")?;
        writeln!(f, "  Delimiter: {:?}", char::from(self.delimiter))?;
        writeln!(f, "  Trim: {}", self.trim)
    }
}

/// Configuration for batch validation
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Whether large batches may be validated in parallel
    pub parallel: bool,
    /// Minimum number of rows before the parallel path is taken
    pub parallel_threshold: usize,
    /// Show a progress bar while validating
    pub show_progress: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 1024,
            show_progress: false,
        }
    }
}

impl ValidationConfig {
    /// Configuration that always validates on the calling thread
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }

    /// Whether a batch of `rows` rows should be validated in parallel
    #[must_use]
    pub const fn use_parallel(&self, rows: usize) -> bool {
        self.parallel && rows >= self.parallel_threshold
    }
}

impl fmt::Display for ValidationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation Configuration:")?;
        writeln!(f, "  Parallel: {}", self.parallel)?;
        writeln!(f, "  Parallel Threshold: {}", self.parallel_threshold)?;
        writeln!(f, "  Show Progress: {}", self.show_progress)
    }
}
