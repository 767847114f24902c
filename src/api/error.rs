//! API error types with structured JSON responses.
//!
//! Validation failures carry the full per-field detail; everything else
//! is collapsed into a generic server error with the real cause logged
//! for operators and never leaked to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::models::{ValidationError, Violation};
use crate::planner::CompletionError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("patient payload failed validation")]
    Validation(#[from] ValidationError),
    #[error("completion provider failure: {0}")]
    Upstream(#[from] CompletionError),
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, violations) = match self {
            ApiError::Validation(err) => {
                tracing::warn!(
                    violations = err.violations.len(),
                    "Rejected invalid patient payload"
                );
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_FAILED",
                    "Patient data failed validation".to_string(),
                    Some(err.violations),
                )
            }
            ApiError::Upstream(err) => {
                tracing::error!(detail = %err, "Care plan generation failed upstream");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_FAILED",
                    "An error occurred while generating the care plan. Please try again."
                        .to_string(),
                    None,
                )
            }
            ApiError::Unexpected(detail) => {
                tracing::error!(detail, "Unexpected API failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal server error occurred. Please contact support.".to_string(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code,
                message,
                violations,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[tokio::test]
    async fn validation_returns_422_with_violations() {
        let err = ApiError::Validation(ValidationError {
            violations: vec![
                Violation::MissingField {
                    field: "primary_diagnosis".into(),
                },
                Violation::OutOfRange {
                    field: "age".into(),
                    min: 0.0,
                    max: 120.0,
                    actual: 121.0,
                },
            ],
        });

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = to_bytes(response.into_body(), 4096).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_FAILED");
        assert_eq!(json["error"]["violations"].as_array().unwrap().len(), 2);
        assert_eq!(json["error"]["violations"][0]["kind"], "missing_field");
        assert_eq!(json["error"]["violations"][1]["field"], "age");
    }

    #[tokio::test]
    async fn upstream_failure_returns_500_without_leaking_detail() {
        let err = ApiError::Upstream(CompletionError::Api {
            status: 429,
            body: "rate limit exceeded for key sk-secret".into(),
        });

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), 4096).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("rate limit"));
        assert!(!text.contains("sk-secret"));
        assert!(!text.contains("429"));

        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["error"]["code"], "GENERATION_FAILED");
        assert!(json["error"]["violations"].is_null());
    }

    #[tokio::test]
    async fn unexpected_failure_returns_500_generic() {
        let response = ApiError::Unexpected("lock poisoned".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), 4096).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INTERNAL");
        assert!(!json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("lock poisoned"));
    }
}
