//! Health aggregation over the registered indicators.

use crate::domain::health::{Health, HealthIndicator, Status};
use crate::error::AppError;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Aggregated health of all registered components.
#[derive(Debug, Clone, Serialize)]
pub struct CompositeHealth {
    pub status: Status,
    pub components: BTreeMap<String, Health>,
}

impl CompositeHealth {
    pub fn is_up(&self) -> bool {
        self.status == Status::Up
    }
}

/// Service running health indicators for the `health` endpoint.
///
/// The overall status is `UP` only when every component is `UP`.
pub struct HealthService {
    indicators: Vec<Arc<dyn HealthIndicator>>,
}

impl HealthService {
    pub fn new(indicators: Vec<Arc<dyn HealthIndicator>>) -> Self {
        Self { indicators }
    }

    /// Runs every indicator and aggregates the result.
    pub async fn aggregate(&self) -> CompositeHealth {
        let mut components = BTreeMap::new();
        for indicator in &self.indicators {
            let health = indicator.health().await;
            if !health.is_up() {
                tracing::warn!("Health component '{}' is down", indicator.name());
            }
            components.insert(indicator.name().to_string(), health);
        }

        let status = if components.values().all(Health::is_up) {
            Status::Up
        } else {
            Status::Down
        };

        CompositeHealth { status, components }
    }

    /// Runs a single indicator by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no indicator has that name.
    pub async fn component(&self, name: &str) -> Result<Health, AppError> {
        let indicator = self
            .indicators
            .iter()
            .find(|i| i.name() == name)
            .ok_or_else(|| {
                AppError::not_found("Health component not found", json!({"component": name}))
            })?;

        Ok(indicator.health().await)
    }
}
