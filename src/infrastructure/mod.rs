//! Infrastructure layer for concrete integrations.
//!
//! Implements the contracts defined by the domain layer.
//!
//! # Modules
//!
//! - [`health`] - Built-in [`crate::domain::health::HealthIndicator`] implementations

pub mod health;
