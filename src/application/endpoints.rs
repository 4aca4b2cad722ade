//! Built-in management endpoints and their operations.
//!
//! Operation paths are relative to the actuator base path and mirror the
//! routes registered in [`crate::api::routes`].

use crate::domain::entities::{EndpointId, EndpointIdError, ExposableEndpoint, WebOperation};

pub const HEALTH: &str = "health";
pub const INFO: &str = "info";

/// Returns every built-in endpoint, before exposure filtering.
///
/// # Errors
///
/// Returns [`EndpointIdError`] if a built-in id fails validation.
pub fn standard_endpoints() -> Result<Vec<ExposableEndpoint>, EndpointIdError> {
    Ok(vec![
        ExposableEndpoint::Web {
            id: EndpointId::parse(HEALTH)?,
            operations: vec![
                WebOperation::new("health", "health"),
                WebOperation::new("health-path", "health/{component}"),
            ],
        },
        ExposableEndpoint::Web {
            id: EndpointId::parse(INFO)?,
            operations: vec![WebOperation::new("info", "info")],
        },
    ])
}
