//! Domain models for patient vital status
//!
//! Raw input rows and the validated records produced from them.

pub mod cause_of_death;
pub mod input;
pub mod types;
pub mod vital_status;

pub use cause_of_death::CauseOfDeath;
pub use input::PatientVitalStatusInput;
pub use types::{AgeAtDeath, PatientId, YearOfDeath};
pub use vital_status::{DeathInfo, PatientVitalStatus, VitalStatus};
