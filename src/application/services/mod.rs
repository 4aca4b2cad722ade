//! Services for the application layer.

pub mod exposure;
pub mod health_service;
pub mod links_resolver;

pub use exposure::EndpointExposure;
pub use health_service::{CompositeHealth, HealthService};
pub use links_resolver::EndpointLinksResolver;
