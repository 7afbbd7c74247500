//! CSV reader for vital status files
//!
//! Reads the `Patient ID, Vital Status, Year of Death, Age at Death, Cause of
//! Death` file into raw input rows. Columns are matched by header name; the
//! rows are not validated here.

use std::io;
use std::path::Path;
use std::time::Instant;

use csv::{ReaderBuilder, Trim};

use crate::config::ReaderConfig;
use crate::error::util::safe_open_file;
use crate::error::{Result, VitalStatusError};
use crate::models::PatientVitalStatusInput;
use crate::models::input::{
    AGE_AT_DEATH_HEADER, CAUSE_OF_DEATH_HEADER, PATIENT_ID_HEADER, STATUS_HEADER,
    YEAR_OF_DEATH_HEADER,
};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Columns every vital status file must carry
pub const REQUIRED_COLUMNS: [&str; 5] = [
    PATIENT_ID_HEADER,
    STATUS_HEADER,
    YEAR_OF_DEATH_HEADER,
    AGE_AT_DEATH_HEADER,
    CAUSE_OF_DEATH_HEADER,
];

/// Read a vital status CSV file into raw rows
pub fn read_vital_status_csv(
    path: &Path,
    config: &ReaderConfig,
) -> Result<Vec<PatientVitalStatusInput>> {
    log_operation_start("Reading vital status file", path);
    let start = Instant::now();

    let file = safe_open_file(path, "reading vital status CSV")?;
    let rows = read_vital_status_from(io::BufReader::new(file), config)?;

    log_operation_complete("read", path, rows.len(), Some(start.elapsed()));
    Ok(rows)
}

/// Read vital status rows from any reader
///
/// Records with too few fields are kept: the missing trailing fields are
/// empty, and the row validator decides whether the row is acceptable.
pub fn read_vital_status_from<R: io::Read>(
    reader: R,
    config: &ReaderConfig,
) -> Result<Vec<PatientVitalStatusInput>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .trim(if config.trim { Trim::All } else { Trim::None })
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(VitalStatusError::MissingColumn((*missing).to_string()));
    }

    let rows = csv_reader
        .deserialize::<PatientVitalStatusInput>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    log::debug!("Deserialized {} vital status rows", rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Patient ID, Vital Status, Year of Death, Age at Death, Cause of Death
A000001, Dead, 2017, 60, Due to Cancer
A000002, Alive, , ,
A000003, Lost to follow-up, , ,
";

    #[test]
    fn test_reads_spaced_header_by_name() {
        let rows = read_vital_status_from(SAMPLE.as_bytes(), &ReaderConfig::default()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            PatientVitalStatusInput::new("A000001", "Dead", "60", "2017", "Due to Cancer")
        );
        assert_eq!(
            rows[2],
            PatientVitalStatusInput::new("A000003", "Lost to follow-up", "", "", "")
        );
    }

    #[test]
    fn test_without_trim_spaced_header_is_missing() {
        let config = ReaderConfig {
            trim: false,
            ..Default::default()
        };
        let err = read_vital_status_from(SAMPLE.as_bytes(), &config).unwrap_err();
        assert!(matches!(err, VitalStatusError::MissingColumn(ref c) if c == "Vital Status"));
    }

    #[test]
    fn test_custom_delimiter() {
        let data = "Patient ID;Vital Status;Year of Death;Age at Death;Cause of Death\nB1;Alive;;;\n";
        let config = ReaderConfig {
            delimiter: b';',
            ..Default::default()
        };
        let rows = read_vital_status_from(data.as_bytes(), &config).unwrap();
        assert_eq!(rows, vec![PatientVitalStatusInput::new("B1", "Alive", "", "", "")]);
    }

    #[test]
    fn test_short_row_reads_missing_fields_as_empty() {
        let data = "Patient ID,Vital Status,Year of Death,Age at Death,Cause of Death\nB1,Dead,2017,60\nB2,Alive,,,\n";
        let rows = read_vital_status_from(data.as_bytes(), &ReaderConfig::default()).unwrap();
        assert_eq!(
            rows,
            vec![
                PatientVitalStatusInput::new("B1", "Dead", "60", "2017", ""),
                PatientVitalStatusInput::new("B2", "Alive", "", "", ""),
            ]
        );
    }

    #[test]
    fn test_invalid_utf8_is_csv_error() {
        let data = b"Patient ID,Vital Status,Year of Death,Age at Death,Cause of Death\nB1,\xff,,,\n";
        let err = read_vital_status_from(&data[..], &ReaderConfig::default()).unwrap_err();
        assert!(matches!(err, VitalStatusError::Csv(_)));
        assert!(!err.to_string().starts_with("CSV error: CSV error"));
    }
}
