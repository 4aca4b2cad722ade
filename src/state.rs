//! Shared state injected into every actuator handler.

use std::sync::Arc;

use crate::application::services::{EndpointLinksResolver, HealthService};

/// Application state cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub links_resolver: Arc<EndpointLinksResolver>,
    pub health_service: Arc<HealthService>,
    pub app_name: String,
    pub base_path: String,
    pub public_base_url: Option<String>,
    pub behind_proxy: bool,
}
