//! Patient payload types: the raw wire draft and the validated record.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One current medication as documented on admission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

/// Patient gender, normalized to a fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Accepted spellings, matched case-insensitively.
    pub fn allowed() -> &'static [&'static str] {
        &["male", "female", "other", "m", "f"]
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mobility level, normalized to a fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobilityLevel {
    Ambulatory,
    Wheelchair,
    Bedbound,
    Walker,
}

impl MobilityLevel {
    pub fn allowed() -> &'static [&'static str] {
        &["ambulatory", "wheelchair", "bedbound", "walker"]
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "ambulatory" => Some(Self::Ambulatory),
            "wheelchair" => Some(Self::Wheelchair),
            "bedbound" => Some(Self::Bedbound),
            "walker" => Some(Self::Walker),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ambulatory => "ambulatory",
            Self::Wheelchair => "wheelchair",
            Self::Bedbound => "bedbound",
            Self::Walker => "walker",
        }
    }
}

impl fmt::Display for MobilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw medication entry as received on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MedicationDraft {
    pub name: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
}

/// Raw patient payload as received on the wire.
///
/// Every scalar field is optional so the validator can report all problems
/// in one pass; numeric fields deserialize as wide signed types so
/// out-of-range values reach the range checks instead of failing at the
/// serde layer. List fields default to empty rather than being absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientDraft {
    // Basic information
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub admission_date: Option<NaiveDate>,
    pub facility: Option<String>,

    // Medical history
    pub primary_diagnosis: Option<String>,
    #[serde(default)]
    pub comorbidities: Vec<String>,

    // Current vitals
    pub blood_pressure: Option<String>,
    pub heart_rate: Option<i64>,
    pub temperature: Option<f64>,
    pub oxygen_saturation: Option<i64>,
    pub pain_level: Option<i64>,

    // Medications & allergies
    #[serde(default)]
    pub current_medications: Vec<MedicationDraft>,
    #[serde(default)]
    pub allergies: Vec<String>,

    // Clinical status
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub mobility_level: Option<String>,
    pub adl_independence: Option<String>,
    #[serde(default)]
    pub fall_risk_factors: Vec<String>,
    pub cognitive_status: Option<String>,

    // Special considerations
    pub isolation_precautions: Option<String>,
    pub diet_restrictions: Option<String>,
}

/// Patient record guaranteed to satisfy every field constraint.
///
/// Produced only by [`super::validate::validate`] and treated as immutable
/// from then on — prompt composition never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientRecord {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub admission_date: NaiveDate,
    pub facility: String,

    pub primary_diagnosis: String,
    pub comorbidities: Vec<String>,

    pub blood_pressure: String,
    pub heart_rate: u32,
    pub temperature: f64,
    pub oxygen_saturation: u32,
    pub pain_level: u32,

    pub current_medications: Vec<Medication>,
    pub allergies: Vec<String>,

    pub symptoms: Vec<String>,
    pub mobility_level: MobilityLevel,
    pub adl_independence: String,
    pub fall_risk_factors: Vec<String>,
    pub cognitive_status: String,

    pub isolation_precautions: Option<String>,
    pub diet_restrictions: Option<String>,
}
