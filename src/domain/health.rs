//! Health model and the indicator contract used by the health endpoint.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Health status of a component or of the whole service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Up,
    Down,
}

/// Result of a single health check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Health {
    pub status: Status,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Health {
    pub fn up() -> Self {
        Self {
            status: Status::Up,
            details: None,
        }
    }

    pub fn down() -> Self {
        Self {
            status: Status::Down,
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn is_up(&self) -> bool {
        self.status == Status::Up
    }
}

/// A named health check contributing to the `health` endpoint.
///
/// # Implementations
///
/// - [`crate::infrastructure::health::PingHealthIndicator`] - Always up
/// - [`crate::infrastructure::health::ExposureHealthIndicator`] - Reports exposed endpoints
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthIndicator: Send + Sync {
    /// Component name used as the key under `components` and as the path
    /// segment in `GET /health/{component}`.
    fn name(&self) -> &str;

    /// Runs the check.
    async fn health(&self) -> Health;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(serde_json::to_value(Status::Up).unwrap(), json!("UP"));
        assert_eq!(serde_json::to_value(Status::Down).unwrap(), json!("DOWN"));
    }

    #[test]
    fn test_health_without_details() {
        let value = serde_json::to_value(Health::up()).unwrap();

        assert_eq!(value, json!({"status": "UP"}));
    }

    #[test]
    fn test_health_with_details() {
        let health = Health::down().with_details(json!({"reason": "closed"}));

        assert!(!health.is_up());
        assert_eq!(
            serde_json::to_value(health).unwrap(),
            json!({"status": "DOWN", "details": {"reason": "closed"}})
        );
    }
}
