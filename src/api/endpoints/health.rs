//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;
use crate::config;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub environment: String,
    pub version: &'static str,
}

/// `GET /health` — service liveness check. No side effects.
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    tracing::debug!("Health check requested");

    Json(HealthResponse {
        status: "healthy",
        environment: ctx.settings.environment.clone(),
        version: config::APP_VERSION,
    })
}
