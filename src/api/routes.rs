//! Actuator route configuration.

use crate::api::handlers::{
    discovery_handler, health_component_handler, health_handler, info_handler,
};
use crate::application::endpoints::{HEALTH, INFO};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Actuator routes, relative to the base path.
///
/// Only endpoints whose id is in `exposed` are routed, so an endpoint is
/// reachable exactly when it is listed in the discovery document.
///
/// # Endpoints
///
/// - `GET /`                     - Discovery document (always routed)
/// - `GET /health`               - Aggregated health
/// - `GET /health/{component}`   - Health of one component
/// - `GET /info`                 - Application information
pub fn actuator_routes<'a>(exposed: impl IntoIterator<Item = &'a str>) -> Router<AppState> {
    let mut router = Router::new().route("/", get(discovery_handler));

    for id in exposed {
        router = match id {
            HEALTH => router
                .route("/health", get(health_handler))
                .route("/health/{component}", get(health_component_handler)),
            INFO => router.route("/info", get(info_handler)),
            _ => router,
        };
    }

    router
}
