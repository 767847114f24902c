//! Shared types for the API layer.

use std::sync::Arc;

use crate::config::Settings;
use crate::planner::{CarePlanService, CompletionClient};

/// Shared context for all API routes.
///
/// Owns the settings and the care plan service; the completion client is
/// injected once at construction and its lifecycle belongs to the process
/// entry point.
#[derive(Clone)]
pub struct ApiContext {
    pub settings: Arc<Settings>,
    pub care_plans: Arc<CarePlanService>,
}

impl ApiContext {
    pub fn new(settings: Settings, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            settings: Arc::new(settings),
            care_plans: Arc::new(CarePlanService::new(client)),
        }
    }
}
