//! DTOs for the health endpoint.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::application::services::CompositeHealth;
use crate::domain::health::{Health, Status};

/// Aggregated health response with per-component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: Status,
    pub components: BTreeMap<String, Health>,
}

impl From<CompositeHealth> for HealthResponse {
    fn from(health: CompositeHealth) -> Self {
        Self {
            status: health.status,
            components: health.components,
        }
    }
}
