//! Built-in health indicators.
//!
//! - [`PingHealthIndicator`] - Always reports `UP`
//! - [`ExposureHealthIndicator`] - Reports how many endpoints are exposed

mod exposure;
mod ping;

pub use exposure::ExposureHealthIndicator;
pub use ping::PingHealthIndicator;
