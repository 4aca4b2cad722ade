//! DTO for the discovery document.

use serde::Serialize;

use crate::domain::entities::Links;

/// HAL discovery document listing the exposed endpoints.
///
/// ```json
/// {
///   "_links": {
///     "self": { "href": "http://localhost:3000/actuator", "templated": false },
///     "health": { "href": "http://localhost:3000/actuator/health", "templated": false },
///     "health-path": { "href": "http://localhost:3000/actuator/health/{component}", "templated": true }
///   }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct DiscoveryResponse {
    #[serde(rename = "_links")]
    pub links: Links,
}
