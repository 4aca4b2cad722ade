//! Liveness indicator that is always up.

use crate::domain::health::{Health, HealthIndicator};
use async_trait::async_trait;

/// Indicator that reports `UP` as long as the service can answer requests.
pub struct PingHealthIndicator;

impl PingHealthIndicator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PingHealthIndicator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HealthIndicator for PingHealthIndicator {
    fn name(&self) -> &str {
        "ping"
    }

    async fn health(&self) -> Health {
        Health::up()
    }
}
