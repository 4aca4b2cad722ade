//! Core domain entities of the discovery document.
//!
//! # Entity Types
//!
//! - [`Link`] - A single HAL link with its derived `templated` flag
//! - [`Links`] - Ordered relation name to link mapping
//! - [`ExposableEndpoint`] - A management endpoint and its operations
//!
//! All entities are immutable once built and include unit tests.

pub mod endpoint;
pub mod link;
pub mod links;

pub use endpoint::{EndpointId, EndpointIdError, ExposableEndpoint, WebOperation};
pub use link::{Link, LinkError};
pub use links::Links;
