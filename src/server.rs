//! HTTP server initialization and runtime setup.
//!
//! Builds the endpoint catalog, health indicators and shared state, then runs
//! the Axum server until a shutdown signal arrives.

use crate::application::endpoints::standard_endpoints;
use crate::application::services::{EndpointExposure, EndpointLinksResolver, HealthService};
use crate::config::Config;
use crate::domain::health::HealthIndicator;
use crate::infrastructure::health::{ExposureHealthIndicator, PingHealthIndicator};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared application state from configuration.
///
/// # Errors
///
/// Returns an error if a built-in endpoint id is invalid.
pub fn build_state(config: &Config) -> Result<AppState> {
    let exposure = EndpointExposure::from_lists(&config.expose_include, &config.expose_exclude);
    let endpoints = exposure.filter(standard_endpoints().context("Invalid built-in endpoint")?);

    if endpoints.is_empty() {
        tracing::warn!("No actuator endpoints exposed; discovery will only link to itself");
    }
    for endpoint in &endpoints {
        tracing::info!("Exposing endpoint '{}'", endpoint.id());
    }

    let links_resolver = Arc::new(EndpointLinksResolver::new(endpoints));

    let indicators: Vec<Arc<dyn HealthIndicator>> = vec![
        Arc::new(PingHealthIndicator::new()),
        Arc::new(ExposureHealthIndicator::new(links_resolver.clone())),
    ];

    Ok(AppState {
        links_resolver,
        health_service: Arc::new(HealthService::new(indicators)),
        app_name: config.app_name.clone(),
        base_path: config.base_path.clone(),
        public_base_url: config.public_base_url.clone(),
        behind_proxy: config.behind_proxy,
    })
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}{}", config.base_path);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
