//! Care plan generation service — composes the prompt, calls the
//! completion provider exactly once, and wraps the result.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

use crate::models::{GeneratedCarePlan, PatientRecord};

use super::claude::CompletionClient;
use super::prompt::{compose_user_prompt, CARE_PLAN_SYSTEM_PROMPT};
use super::shell::wrap_care_plan_html;
use super::CompletionError;

/// Token ceiling for a single care plan completion.
const CARE_PLAN_MAX_TOKENS: u32 = 4000;

/// Generates care plans from validated patient records.
///
/// The completion client is injected at construction; the service holds no
/// other state and never mutates the record it is given.
pub struct CarePlanService {
    client: Arc<dyn CompletionClient>,
}

impl CarePlanService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Generate one care plan.
    ///
    /// No retry, no degradation: a provider failure surfaces as-is and the
    /// API layer turns it into a generic server error.
    pub async fn generate(
        &self,
        patient: &PatientRecord,
    ) -> Result<GeneratedCarePlan, CompletionError> {
        tracing::info!(patient = %patient.name, "Generating care plan");

        let user_prompt = compose_user_prompt(patient);
        let fragment = self
            .client
            .complete(CARE_PLAN_SYSTEM_PROMPT, &user_prompt, CARE_PLAN_MAX_TOKENS)
            .await?;

        tracing::info!(patient = %patient.name, "Care plan generated");

        Ok(GeneratedCarePlan {
            patient_name: patient.name.clone(),
            care_plan_html: wrap_care_plan_html(&fragment),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        })
    }
}
