//! Data Transfer Objects for actuator responses.
//!
//! All DTOs use Serde for JSON serialization.

pub mod health;
pub mod info;
pub mod links;
