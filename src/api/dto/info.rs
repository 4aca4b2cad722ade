//! DTOs for the info endpoint.

use serde::Serialize;

/// Application information response.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub app: AppInfo,
}

/// Name and version of the running application.
#[derive(Debug, Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}
