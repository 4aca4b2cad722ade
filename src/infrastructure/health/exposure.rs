//! Indicator reporting the endpoints listed in the discovery document.

use crate::application::services::EndpointLinksResolver;
use crate::domain::health::{Health, HealthIndicator};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

/// Reports `UP` when at least one endpoint is exposed, `DOWN` otherwise.
///
/// Details carry the exposed count and ids, e.g.
/// `{"exposed": 2, "endpoints": ["health", "info"]}`.
pub struct ExposureHealthIndicator {
    resolver: Arc<EndpointLinksResolver>,
}

impl ExposureHealthIndicator {
    pub fn new(resolver: Arc<EndpointLinksResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl HealthIndicator for ExposureHealthIndicator {
    fn name(&self) -> &str {
        "links"
    }

    async fn health(&self) -> Health {
        let ids: Vec<&str> = self
            .resolver
            .endpoints()
            .iter()
            .map(|e| e.id().as_str())
            .collect();

        let health = if ids.is_empty() {
            Health::down()
        } else {
            Health::up()
        };
        health.with_details(json!({"exposed": ids.len(), "endpoints": ids}))
    }
}
