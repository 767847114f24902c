//! Patient input validation.
//!
//! Checks every field of a [`PatientDraft`] against its constraint and
//! reports **all** violations at once rather than stopping at the first.
//! Validation is pure: no I/O, no side effects.

use serde::Serialize;
use thiserror::Error;

use super::patient::{
    Gender, Medication, MedicationDraft, MobilityLevel, PatientDraft, PatientRecord,
};

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    #[error("{field} is required")]
    MissingField { field: String },

    #[error("{field} must not be empty")]
    EmptyField { field: String },

    #[error("{field} must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("{field} must be one of {allowed:?}, got {actual:?}")]
    InvalidEnum {
        field: String,
        allowed: &'static [&'static str],
        actual: String,
    },
}

impl Violation {
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field }
            | Self::EmptyField { field }
            | Self::OutOfRange { field, .. }
            | Self::InvalidEnum { field, .. } => field,
        }
    }
}

/// Aggregate of every constraint violation found in one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("patient payload failed validation with {} violation(s)", .violations.len())]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

/// Validate a raw patient draft into a [`PatientRecord`].
///
/// On failure the returned error carries one entry per offending field.
pub fn validate(draft: PatientDraft) -> Result<PatientRecord, ValidationError> {
    let mut violations = Vec::new();

    let name = require_text(&mut violations, "name", draft.name);
    let age = require_int(&mut violations, "age", draft.age, 0, 120);
    let gender = require_enum(&mut violations, "gender", draft.gender, Gender::allowed(), Gender::parse);
    let admission_date = require(&mut violations, "admission_date", draft.admission_date);
    let facility = require_text(&mut violations, "facility", draft.facility);

    let primary_diagnosis =
        require_text(&mut violations, "primary_diagnosis", draft.primary_diagnosis);

    let blood_pressure = require(&mut violations, "blood_pressure", draft.blood_pressure);
    let heart_rate = require_int(&mut violations, "heart_rate", draft.heart_rate, 20, 300);
    let temperature =
        require_float(&mut violations, "temperature", draft.temperature, 90.0, 110.0);
    let oxygen_saturation =
        require_int(&mut violations, "oxygen_saturation", draft.oxygen_saturation, 0, 100);
    let pain_level = require_int(&mut violations, "pain_level", draft.pain_level, 0, 10);

    let current_medications: Option<Vec<Medication>> = draft
        .current_medications
        .into_iter()
        .enumerate()
        .map(|(idx, med)| validate_medication(&mut violations, idx, med))
        .collect();

    let mobility_level = require_enum(
        &mut violations,
        "mobility_level",
        draft.mobility_level,
        MobilityLevel::allowed(),
        MobilityLevel::parse,
    );
    let adl_independence = require(&mut violations, "adl_independence", draft.adl_independence);
    let cognitive_status = require(&mut violations, "cognitive_status", draft.cognitive_status);

    let record = (|| {
        Some(PatientRecord {
            name: name?,
            age: age?,
            gender: gender?,
            admission_date: admission_date?,
            facility: facility?,
            primary_diagnosis: primary_diagnosis?,
            comorbidities: draft.comorbidities,
            blood_pressure: blood_pressure?,
            heart_rate: heart_rate?,
            temperature: temperature?,
            oxygen_saturation: oxygen_saturation?,
            pain_level: pain_level?,
            current_medications: current_medications?,
            allergies: draft.allergies,
            symptoms: draft.symptoms,
            mobility_level: mobility_level?,
            adl_independence: adl_independence?,
            fall_risk_factors: draft.fall_risk_factors,
            cognitive_status: cognitive_status?,
            isolation_precautions: draft.isolation_precautions,
            diet_restrictions: draft.diet_restrictions,
        })
    })();

    match (record, violations.is_empty()) {
        (Some(record), true) => Ok(record),
        _ => Err(ValidationError { violations }),
    }
}

/// Required field, no further constraint.
fn require<T>(violations: &mut Vec<Violation>, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        violations.push(Violation::MissingField { field: field.into() });
    }
    value
}

/// Required, non-empty string.
fn require_text(
    violations: &mut Vec<Violation>,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        None => {
            violations.push(Violation::MissingField { field: field.into() });
            None
        }
        Some(s) if s.is_empty() => {
            violations.push(Violation::EmptyField { field: field.into() });
            None
        }
        Some(s) => Some(s),
    }
}

/// Required integer inside a closed interval.
fn require_int(
    violations: &mut Vec<Violation>,
    field: &str,
    value: Option<i64>,
    min: i64,
    max: i64,
) -> Option<u32> {
    match value {
        None => {
            violations.push(Violation::MissingField { field: field.into() });
            None
        }
        Some(n) if n < min || n > max => {
            violations.push(Violation::OutOfRange {
                field: field.into(),
                min: min as f64,
                max: max as f64,
                actual: n as f64,
            });
            None
        }
        Some(n) => Some(n as u32),
    }
}

/// Required float inside a closed interval.
fn require_float(
    violations: &mut Vec<Violation>,
    field: &str,
    value: Option<f64>,
    min: f64,
    max: f64,
) -> Option<f64> {
    match value {
        None => {
            violations.push(Violation::MissingField { field: field.into() });
            None
        }
        Some(x) if x < min || x > max => {
            violations.push(Violation::OutOfRange {
                field: field.into(),
                min,
                max,
                actual: x,
            });
            None
        }
        Some(x) => Some(x),
    }
}

/// Required enumeration with case-insensitive matching.
fn require_enum<T>(
    violations: &mut Vec<Violation>,
    field: &str,
    value: Option<String>,
    allowed: &'static [&'static str],
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    match value {
        None => {
            violations.push(Violation::MissingField { field: field.into() });
            None
        }
        Some(raw) => match parse(&raw) {
            Some(parsed) => Some(parsed),
            None => {
                violations.push(Violation::InvalidEnum {
                    field: field.into(),
                    allowed,
                    actual: raw,
                });
                None
            }
        },
    }
}

fn validate_medication(
    violations: &mut Vec<Violation>,
    idx: usize,
    med: MedicationDraft,
) -> Option<Medication> {
    let name = require_text(violations, &format!("current_medications[{idx}].name"), med.name);
    let dosage = require_text(
        violations,
        &format!("current_medications[{idx}].dosage"),
        med.dosage,
    );
    let frequency = require_text(
        violations,
        &format!("current_medications[{idx}].frequency"),
        med.frequency,
    );

    Some(Medication {
        name: name?,
        dosage: dosage?,
        frequency: frequency?,
    })
}
