//! Root endpoint — service identification.

use axum::Json;
use serde::Serialize;

use crate::config;

#[derive(Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

/// `GET /` — API information.
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: config::APP_NAME,
        version: config::APP_VERSION,
        status: "running",
    })
}
