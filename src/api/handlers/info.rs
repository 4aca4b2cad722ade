//! Handler for the info endpoint.

use axum::{Json, extract::State};

use crate::api::dto::info::{AppInfo, InfoResponse};
use crate::state::AppState;

/// Returns application name and version.
///
/// # Endpoint
///
/// `GET /actuator/info`
///
/// # Response
///
/// ```json
/// { "app": { "name": "actuator-links", "version": "0.1.0" } }
/// ```
pub async fn info_handler(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        app: AppInfo {
            name: state.app_name,
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}
