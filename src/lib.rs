//! # Actuator Links
//!
//! HAL discovery document and management endpoints for Axum services.
//!
//! `GET /actuator` answers with a `_links` object pointing at every exposed
//! endpoint. Each entry is a [`domain::entities::Link`]: an href plus a
//! `templated` flag derived from whether the href contains `{`.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Links, endpoint descriptions and the health contract
//! - **Application Layer** ([`application`]) - Link resolution, exposure and health aggregation
//! - **Infrastructure Layer** ([`infrastructure`]) - Built-in health indicators
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export ACTUATOR_EXPOSE_INCLUDE="health,info"
//! cargo run
//! curl http://localhost:3000/actuator
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{EndpointExposure, EndpointLinksResolver, HealthService};
    pub use crate::domain::entities::{EndpointId, ExposableEndpoint, Link, LinkError, Links};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
