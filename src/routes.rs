//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `<base>`     - Discovery document
//! - `<base>/*`   - Exposed actuator endpoints (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Wraps [`actuator_router`] with trailing slash normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(actuator_router(state))
}

/// Actuator routes mounted under `state.base_path`, with request tracing.
///
/// Only endpoints the links resolver exposes are routed.
pub fn actuator_router(state: AppState) -> Router {
    let exposed: Vec<String> = state
        .links_resolver
        .endpoints()
        .iter()
        .map(|e| e.id().to_lower_case_string())
        .collect();

    let actuator = api::routes::actuator_routes(exposed.iter().map(String::as_str));

    Router::new()
        .nest(&state.base_path, actuator)
        .with_state(state)
        .layer(tracing::layer())
}
