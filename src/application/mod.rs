//! Application layer services.
//!
//! This layer turns the domain model into the data served by the actuator
//! endpoints. Services are shared between handlers through [`crate::state::AppState`].
//!
//! # Available Services
//!
//! - [`services::links_resolver::EndpointLinksResolver`] - Discovery document links
//! - [`services::exposure::EndpointExposure`] - Include/exclude endpoint filter
//! - [`services::health_service::HealthService`] - Health aggregation
//!
//! The built-in endpoint catalog lives in [`endpoints`].

pub mod endpoints;
pub mod services;
