//! Care plan output type.

use serde::{Deserialize, Serialize};

/// Final care plan returned to the caller.
///
/// Created once per request and never persisted — its lifetime ends when
/// the response is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedCarePlan {
    pub patient_name: String,
    /// HTML fragment wrapped in the fixed presentation shell.
    pub care_plan_html: String,
    /// ISO-8601 UTC timestamp with trailing `Z`.
    pub generated_at: String,
}
