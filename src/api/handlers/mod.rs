//! HTTP request handlers for actuator endpoints.
//!
//! Each handler module corresponds to one management endpoint.

pub mod discovery;
pub mod health;
pub mod info;

pub use discovery::discovery_handler;
pub use health::{health_component_handler, health_handler};
pub use info::info_handler;
