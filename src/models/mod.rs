pub mod care_plan;
pub mod patient;
pub mod validate;

pub use care_plan::GeneratedCarePlan;
pub use patient::{Gender, Medication, MobilityLevel, PatientDraft, PatientRecord};
pub use validate::{validate, ValidationError, Violation};
