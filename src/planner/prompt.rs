//! Deterministic prompt composition from a validated patient record.
//!
//! The user prompt is a fixed nine-section template; composing the same
//! record twice yields byte-identical text.

use crate::models::{Medication, PatientRecord};

/// Rendered in place of an empty list field.
const NONE_DOCUMENTED: &str = "None documented";

/// System instruction defining the assistant persona and output format.
pub const CARE_PLAN_SYSTEM_PROMPT: &str = "\
You are an expert nursing care plan generator for skilled nursing facilities.
You have extensive experience with NANDA nursing diagnoses, evidence-based interventions, and comprehensive care planning.

Your task is to generate a complete, professional care plan based on patient data provided.

Output Requirements:
- Use proper medical terminology
- Include NANDA nursing diagnoses where applicable
- Provide specific, actionable interventions with frequencies
- Consider all patient risk factors
- Format output as clean, professional HTML suitable for display and printing
- Be comprehensive but concise
- Ensure all recommendations are evidence-based and realistic for skilled nursing facility settings";

/// The fixed nine-section structure requested from the model. Section
/// order is part of the contract and not configurable.
const CARE_PLAN_SECTIONS: &str = r#"Generate a structured care plan with the following sections in HTML format:

1. **Patient Summary** - Brief overview of patient status
2. **Nursing Diagnoses** - 3-5 priority nursing diagnoses (use NANDA format when appropriate)
3. **Goals**:
   - Short-term goals (achievable within 1 week)
   - Long-term goals (achievable by discharge)
4. **Interventions** - Specific interventions with frequency, organized by:
   - Medication administration
   - Vital signs monitoring
   - Mobility/positioning
   - Wound care (if applicable)
   - Nutrition/hydration
   - Safety measures
5. **Risk Assessments**:
   - Fall risk score and precautions
   - Pressure injury risk
   - Infection risk
6. **Monitoring Schedule** - What to check and how often
7. **Discharge Planning** - Considerations for discharge readiness
8. **Special Precautions** - Any specific safety or care precautions
9. **Family Education** - Key points to educate family/caregivers

Format the output as clean, professional HTML with appropriate headings (<h2>, <h3>), lists (<ul>, <ol>), and styling that works well for both screen display and printing. Use a medical-professional aesthetic."#;

/// Compose the user prompt for one patient.
///
/// Pure function of the record: section order is fixed, list fields render
/// comma-joined (or `None documented` when empty), optional fields render
/// `None` when absent.
pub fn compose_user_prompt(patient: &PatientRecord) -> String {
    format!(
        "Generate a comprehensive nursing care plan for the following patient:\n\
         \n\
         PATIENT INFORMATION:\n\
         - Name: {name}\n\
         - Age: {age} years old\n\
         - Gender: {gender}\n\
         - Admission Date: {admission_date}\n\
         - Facility: {facility}\n\
         \n\
         MEDICAL HISTORY:\n\
         - Primary Diagnosis: {primary_diagnosis}\n\
         - Comorbidities: {comorbidities}\n\
         \n\
         CURRENT VITALS:\n\
         - Blood Pressure: {blood_pressure}\n\
         - Heart Rate: {heart_rate} bpm\n\
         - Temperature: {temperature}°F\n\
         - Oxygen Saturation: {oxygen_saturation}%\n\
         - Pain Level: {pain_level}/10\n\
         \n\
         CURRENT MEDICATIONS:\n\
         {medications}\n\
         \n\
         ALLERGIES:\n\
         {allergies}\n\
         \n\
         CLINICAL STATUS:\n\
         - Current Symptoms: {symptoms}\n\
         - Mobility Level: {mobility_level}\n\
         - ADL Independence: {adl_independence}\n\
         - Fall Risk Factors: {fall_risk_factors}\n\
         - Cognitive Status: {cognitive_status}\n\
         \n\
         SPECIAL CONSIDERATIONS:\n\
         - Isolation Precautions: {isolation_precautions}\n\
         - Diet Restrictions: {diet_restrictions}\n\
         \n\
         {sections}",
        name = patient.name,
        age = patient.age,
        gender = patient.gender,
        admission_date = patient.admission_date.format("%Y-%m-%d"),
        facility = patient.facility,
        primary_diagnosis = patient.primary_diagnosis,
        comorbidities = render_list(&patient.comorbidities),
        blood_pressure = patient.blood_pressure,
        heart_rate = patient.heart_rate,
        temperature = patient.temperature,
        oxygen_saturation = patient.oxygen_saturation,
        pain_level = patient.pain_level,
        medications = render_medications(&patient.current_medications),
        allergies = render_list(&patient.allergies),
        symptoms = render_list(&patient.symptoms),
        mobility_level = patient.mobility_level,
        adl_independence = patient.adl_independence,
        fall_risk_factors = render_list(&patient.fall_risk_factors),
        cognitive_status = patient.cognitive_status,
        isolation_precautions = render_optional(patient.isolation_precautions.as_deref()),
        diet_restrictions = render_optional(patient.diet_restrictions.as_deref()),
        sections = CARE_PLAN_SECTIONS,
    )
}

fn render_list(items: &[String]) -> String {
    if items.is_empty() {
        NONE_DOCUMENTED.to_string()
    } else {
        items.join(", ")
    }
}

/// One line per medication, `  - {name}: {dosage} {frequency}`.
fn render_medications(medications: &[Medication]) -> String {
    if medications.is_empty() {
        return NONE_DOCUMENTED.to_string();
    }
    medications
        .iter()
        .map(|med| format!("  - {}: {} {}", med.name, med.dosage, med.frequency))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_optional(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::models::{Gender, MobilityLevel};

    use super::*;

    fn sample_record() -> PatientRecord {
        PatientRecord {
            name: "John Doe".into(),
            age: 78,
            gender: Gender::Male,
            admission_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            facility: "Sunrise Senior Living".into(),
            primary_diagnosis: "Stroke (CVA) with right-sided weakness".into(),
            comorbidities: vec!["Type 2 Diabetes".into(), "Hypertension".into()],
            blood_pressure: "145/88".into(),
            heart_rate: 78,
            temperature: 98.6,
            oxygen_saturation: 96,
            pain_level: 3,
            current_medications: vec![Medication {
                name: "Metformin".into(),
                dosage: "500mg".into(),
                frequency: "BID".into(),
            }],
            allergies: vec!["Penicillin".into()],
            symptoms: vec!["Right-sided weakness".into(), "Confusion".into()],
            mobility_level: MobilityLevel::Wheelchair,
            adl_independence: "Requires assistance with all ADLs".into(),
            fall_risk_factors: vec!["History of falls".into()],
            cognitive_status: "Alert but confused".into(),
            isolation_precautions: None,
            diet_restrictions: Some("Diabetic diet".into()),
        }
    }

    /// Minimal record: every list empty, every optional absent.
    fn minimal_record() -> PatientRecord {
        PatientRecord {
            name: "Minimal Test Patient".into(),
            age: 70,
            gender: Gender::Male,
            admission_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            facility: "Test Facility".into(),
            primary_diagnosis: "Test Diagnosis".into(),
            comorbidities: vec![],
            blood_pressure: "120/80".into(),
            heart_rate: 72,
            temperature: 98.6,
            oxygen_saturation: 98,
            pain_level: 0,
            current_medications: vec![],
            allergies: vec![],
            symptoms: vec![],
            mobility_level: MobilityLevel::Ambulatory,
            adl_independence: "Independent".into(),
            fall_risk_factors: vec![],
            cognitive_status: "Alert".into(),
            isolation_precautions: None,
            diet_restrictions: None,
        }
    }

    #[test]
    fn prompt_contains_identity_and_vitals() {
        let prompt = compose_user_prompt(&sample_record());
        assert!(prompt.contains("- Name: John Doe"));
        assert!(prompt.contains("- Age: 78 years old"));
        assert!(prompt.contains("- Gender: Male"));
        assert!(prompt.contains("- Admission Date: 2024-01-15"));
        assert!(prompt.contains("- Heart Rate: 78 bpm"));
        assert!(prompt.contains("- Temperature: 98.6°F"));
        assert!(prompt.contains("- Oxygen Saturation: 96%"));
        assert!(prompt.contains("- Pain Level: 3/10"));
    }

    #[test]
    fn lists_render_comma_joined() {
        let prompt = compose_user_prompt(&sample_record());
        assert!(prompt.contains("- Comorbidities: Type 2 Diabetes, Hypertension"));
        assert!(prompt.contains("- Current Symptoms: Right-sided weakness, Confusion"));
    }

    #[test]
    fn single_medication_renders_one_line() {
        let prompt = compose_user_prompt(&sample_record());
        assert!(prompt.contains("- Metformin: 500mg BID"));
    }

    #[test]
    fn empty_medication_list_renders_none_documented() {
        let mut record = sample_record();
        record.current_medications = vec![];
        let prompt = compose_user_prompt(&record);
        assert!(prompt.contains("CURRENT MEDICATIONS:\nNone documented"));
    }

    #[test]
    fn multiple_medications_render_one_line_each() {
        let mut record = sample_record();
        record.current_medications.push(Medication {
            name: "Lisinopril".into(),
            dosage: "10mg".into(),
            frequency: "QD".into(),
        });
        let prompt = compose_user_prompt(&record);
        assert!(prompt.contains("  - Metformin: 500mg BID\n  - Lisinopril: 10mg QD"));
    }

    #[test]
    fn minimal_record_renders_none_documented_for_each_empty_list() {
        let prompt = compose_user_prompt(&minimal_record());
        // comorbidities, medications, allergies, symptoms, fall risk factors
        assert!(prompt.matches(NONE_DOCUMENTED).count() >= 5);
    }

    #[test]
    fn absent_optionals_render_none() {
        let prompt = compose_user_prompt(&minimal_record());
        assert!(prompt.contains("- Isolation Precautions: None\n"));
        assert!(prompt.contains("- Diet Restrictions: None"));
    }

    #[test]
    fn present_optional_renders_its_value() {
        let prompt = compose_user_prompt(&sample_record());
        assert!(prompt.contains("- Diet Restrictions: Diabetic diet"));
    }

    #[test]
    fn composition_is_deterministic() {
        let record = sample_record();
        assert_eq!(compose_user_prompt(&record), compose_user_prompt(&record));
    }

    #[test]
    fn all_nine_sections_appear_in_order() {
        let prompt = compose_user_prompt(&sample_record());
        let sections = [
            "**Patient Summary**",
            "**Nursing Diagnoses**",
            "**Goals**",
            "**Interventions**",
            "**Risk Assessments**",
            "**Monitoring Schedule**",
            "**Discharge Planning**",
            "**Special Precautions**",
            "**Family Education**",
        ];
        let mut last = 0;
        for section in sections {
            let pos = prompt.find(section).unwrap_or_else(|| {
                panic!("section {section} missing from prompt");
            });
            assert!(pos > last, "section {section} out of order");
            last = pos;
        }
    }

    #[test]
    fn system_prompt_sets_persona() {
        assert!(CARE_PLAN_SYSTEM_PROMPT.contains("nursing care plan generator"));
        assert!(CARE_PLAN_SYSTEM_PROMPT.contains("HTML"));
    }
}
