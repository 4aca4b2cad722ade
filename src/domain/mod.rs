//! Domain layer containing the discovery model.
//!
//! # Architecture
//!
//! - [`entities`] - Links, relation maps and endpoint descriptions
//! - [`health`] - Health model and the [`health::HealthIndicator`] contract
//!
//! The domain layer has no dependencies on the HTTP or infrastructure layers.

pub mod entities;
pub mod health;
