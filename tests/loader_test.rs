//! Reading and validating whole vital status files.

use std::io::Write;

use vital_status::{
    ReaderConfig, ValidationConfig, ValidationSummary, VitalStatus, VitalStatusError,
    load_and_validate, partition_results, read_vital_status_csv, validate_all,
    PatientVitalStatusInput,
};

const VITAL_STATUS_CSV: &str = "\
Patient ID, Vital Status, Year of Death, Age at Death, Cause of Death
A000001, Dead, 2017, 60, Due to Cancer
A000002, Alive, , ,
A000003, Lost to follow-up, , ,
A000004, Alive, 2015, 45, Due to Cancer
A000005, Dead, , ,
";

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_and_validate_file() {
    let file = write_csv(VITAL_STATUS_CSV);
    let results = load_and_validate(
        file.path(),
        &ReaderConfig::default(),
        &ValidationConfig::default(),
    )
    .unwrap();

    assert_eq!(results.len(), 5);
    let summary = ValidationSummary::from_results(&results);
    assert_eq!(summary.alive, 1);
    assert_eq!(summary.dead, 1);
    assert_eq!(summary.lost_to_follow_up, 1);
    assert_eq!(summary.invalid, 2);

    let (valid, invalid) = partition_results(results);
    assert!(matches!(valid[0].vital_status, VitalStatus::Dead(_)));
    assert_eq!(invalid.len(), 2);
    assert!(
        invalid
            .iter()
            .all(|e| e.to_string().starts_with("Invalid vital status: "))
    );
}

#[test]
fn test_short_row_does_not_abort_batch() {
    let file = write_csv(
        "\
Patient ID, Vital Status, Year of Death, Age at Death, Cause of Death
A000001, Dead, 2017, 60, Due to Cancer
A000002, Alive, , ,
A000006, Dead, 2017, 60
A000003, Lost to follow-up, , ,
",
    );
    let results = load_and_validate(
        file.path(),
        &ReaderConfig::default(),
        &ValidationConfig::default(),
    )
    .unwrap();

    assert_eq!(results.len(), 4);
    let summary = ValidationSummary::from_results(&results);
    assert_eq!(summary.valid(), 3);
    assert_eq!(summary.invalid, 1);

    let err = results[2].as_ref().unwrap_err();
    assert_eq!(
        err.row(),
        Some(&PatientVitalStatusInput::new("A000006", "Dead", "60", "2017", ""))
    );
}

#[test]
fn test_missing_file() {
    let err = read_vital_status_csv(
        std::path::Path::new("/no/such/vital_status.csv"),
        &ReaderConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, VitalStatusError::NotFound(_)));
}

#[test]
fn test_missing_column() {
    let file = write_csv("Patient ID,Vital Status,Year of Death,Age at Death\nA1,Alive,,\n");
    let err = read_vital_status_csv(file.path(), &ReaderConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "Missing column in header: Cause of Death");
}

#[test]
fn test_parallel_and_sequential_agree() {
    let statuses = ["Dead", "Alive", "Lost to follow-up", "Gone"];
    let rows: Vec<_> = (0..5_000)
        .map(|i| {
            let status = statuses[i % statuses.len()];
            if status == "Dead" {
                PatientVitalStatusInput::new(format!("P{i}"), status, "70", "2001", "Unknown Cause")
            } else {
                PatientVitalStatusInput::new(format!("P{i}"), status, "", "", "")
            }
        })
        .collect();

    let parallel = validate_all(
        &rows,
        &ValidationConfig {
            parallel: true,
            parallel_threshold: 1,
            show_progress: false,
        },
    );
    let sequential = validate_all(&rows, &ValidationConfig::sequential());

    assert_eq!(parallel, sequential);
    for (row, result) in rows.iter().zip(&parallel) {
        match result {
            Ok(record) => assert_eq!(record.patient_id.as_str(), row.patient_id),
            Err(err) => assert_eq!(err.row(), Some(row)),
        }
    }
    assert_eq!(ValidationSummary::from_results(&parallel).invalid, 1_250);
}
