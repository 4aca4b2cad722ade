//! Handlers for the health endpoint.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::health::HealthResponse;
use crate::domain::health::Health;
use crate::error::AppError;
use crate::state::AppState;

/// Returns aggregated health of all registered components.
///
/// # Endpoint
///
/// `GET /actuator/health`
///
/// # Response Codes
///
/// - **200 OK**: All components are `UP`
/// - **503 Service Unavailable**: One or more components are `DOWN`
///
/// # Response
///
/// ```json
/// {
///   "status": "UP",
///   "components": {
///     "links": { "status": "UP", "details": { "exposed": 2, "endpoints": ["health", "info"] } },
///     "ping": { "status": "UP" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let health = state.health_service.aggregate().await;

    if health.is_up() {
        Ok(Json(health.into()))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(health.into())))
    }
}

/// Returns health of a single component.
///
/// # Endpoint
///
/// `GET /actuator/health/{component}`
///
/// # Response Codes
///
/// - **200 OK**: Component is `UP`
/// - **503 Service Unavailable**: Component is `DOWN`
/// - **404 Not Found**: No component with that name
pub async fn health_component_handler(
    State(state): State<AppState>,
    Path(component): Path<String>,
) -> Result<(StatusCode, Json<Health>), AppError> {
    let health = state.health_service.component(&component).await?;

    let status = if health.is_up() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((status, Json(health)))
}
