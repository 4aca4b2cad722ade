//! Handler for the discovery document.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, Uri},
};

use crate::api::dto::links::DiscoveryResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_url::request_origin;

/// Lists links to every exposed endpoint.
///
/// # Endpoint
///
/// `GET /actuator` (the base path is configurable)
///
/// # Request URL
///
/// Links are resolved against `PUBLIC_BASE_URL` + base path when configured,
/// otherwise against the origin taken from the request headers or, for
/// HTTP/2 and absolute-form requests, the request URI (see [`request_origin`]).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the origin cannot be determined.
pub async fn discovery_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Json<DiscoveryResponse>, AppError> {
    let origin = match state.public_base_url {
        Some(ref url) => url.clone(),
        None => request_origin(&headers, &uri, state.behind_proxy)?,
    };
    let request_url = format!("{}{}", origin, state.base_path);

    let links = state.links_resolver.resolve_links(&request_url);
    tracing::debug!("Resolved {} link(s) for {}", links.len(), request_url);

    Ok(Json(DiscoveryResponse { links }))
}
