//! HTTP layer for the actuator endpoints.
//!
//! This layer translates HTTP requests into application calls and formats
//! responses according to the HAL and health JSON contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
