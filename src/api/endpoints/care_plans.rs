//! Care plan generation endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{validate, GeneratedCarePlan, PatientDraft};

/// `POST /generate-care-plan` — validate the patient payload and produce
/// an AI-drafted nursing care plan.
///
/// Validation runs before any upstream call; an invalid payload never
/// reaches the completion provider.
pub async fn generate(
    State(ctx): State<ApiContext>,
    Json(draft): Json<PatientDraft>,
) -> Result<Json<GeneratedCarePlan>, ApiError> {
    let patient = validate(draft)?;

    tracing::info!(patient = %patient.name, "Care plan generation requested");
    let plan = ctx.care_plans.generate(&patient).await?;

    Ok(Json(plan))
}
