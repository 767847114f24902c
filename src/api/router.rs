//! API router.
//!
//! Returns a composable `Router` with the CORS and request-logging layers
//! applied. Route table:
//!
//! - `GET  /` — service info
//! - `GET  /health` — liveness check
//! - `POST /generate-care-plan` — care plan generation

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::config::Settings;

/// Build the API router for the given context.
pub fn api_router(ctx: ApiContext) -> Router {
    let cors = cors_layer(&ctx.settings);

    Router::new()
        .route("/", get(endpoints::info::root))
        .route("/health", get(endpoints::health::check))
        .route("/generate-care-plan", post(endpoints::care_plans::generate))
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(cors)
}

/// CORS layer restricted to the configured origins.
fn cors_layer(settings: &Settings) -> CorsLayer {
    let mut origins: Vec<HeaderValue> = Vec::new();
    for origin in &settings.cors_origins {
        match origin.parse() {
            Ok(value) => origins.push(value),
            Err(_) => tracing::warn!(origin, "Ignoring unparseable CORS origin"),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
