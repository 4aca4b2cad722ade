//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export ACTUATOR_BASE_PATH="/actuator"
//! export ACTUATOR_EXPOSE_INCLUDE="health,info"
//! export PUBLIC_BASE_URL="https://api.example.com"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `APP_NAME` - Name reported by the `info` endpoint (default: `actuator-links`)
//! - `ACTUATOR_BASE_PATH` - Mount point of the discovery document (default: `/actuator`)
//! - `ACTUATOR_EXPOSE_INCLUDE` - Comma-separated endpoint ids or `*` (default: `health,info`)
//! - `ACTUATOR_EXPOSE_EXCLUDE` - Comma-separated endpoint ids or `*` (default: empty)
//! - `PUBLIC_BASE_URL` - Externally visible origin used for links (default: taken from `Host`)
//! - `BEHIND_PROXY` - Trust `X-Forwarded-Proto` / `X-Forwarded-Host` (default: `false`)

use anyhow::Result;
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub app_name: String,
    /// Discovery document path, without a trailing slash.
    pub base_path: String,
    pub expose_include: String,
    pub expose_exclude: String,
    /// When set, links are built from this origin instead of the request `Host`.
    pub public_base_url: Option<String>,
    /// When true, the request scheme and host are read from `X-Forwarded-Proto`
    /// and `X-Forwarded-Host`. Enable only behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            app_name: env!("CARGO_PKG_NAME").to_string(),
            base_path: "/actuator".to_string(),
            expose_include: "health,info".to_string(),
            expose_exclude: String::new(),
            public_base_url: None,
            behind_proxy: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let app_name = env::var("APP_NAME").unwrap_or(defaults.app_name);

        let base_path = env::var("ACTUATOR_BASE_PATH")
            .map(|v| normalize_base_path(&v))
            .unwrap_or(defaults.base_path);

        let expose_include = env::var("ACTUATOR_EXPOSE_INCLUDE").unwrap_or(defaults.expose_include);
        let expose_exclude = env::var("ACTUATOR_EXPOSE_EXCLUDE").unwrap_or(defaults.expose_exclude);

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim_end_matches('/').to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            listen_addr,
            log_level,
            log_format,
            app_name,
            base_path,
            expose_include,
            expose_exclude,
            public_base_url,
            behind_proxy,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_path` is empty, does not start with `/`, or contains `{`, `}`,
    ///   `*` or whitespace
    /// - `public_base_url` is not an absolute HTTP(S) URL
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.base_path.is_empty() {
            anyhow::bail!("ACTUATOR_BASE_PATH must not be empty or '/'");
        }

        if !self.base_path.starts_with('/') {
            anyhow::bail!(
                "ACTUATOR_BASE_PATH must start with '/', got '{}'",
                self.base_path
            );
        }

        if let Some(c) = self
            .base_path
            .chars()
            .find(|&c| matches!(c, '{' | '}' | '*') || c.is_whitespace())
        {
            anyhow::bail!(
                "ACTUATOR_BASE_PATH must not contain {:?}, got '{}'",
                c,
                self.base_path
            );
        }

        if let Some(ref public_base_url) = self.public_base_url {
            let url = Url::parse(public_base_url).map_err(|e| {
                anyhow::anyhow!("PUBLIC_BASE_URL is not a valid URL ({e}): '{public_base_url}'")
            })?;
            if url.scheme() != "http" && url.scheme() != "https" {
                anyhow::bail!(
                    "PUBLIC_BASE_URL must use http or https, got '{}'",
                    public_base_url
                );
            }
        }

        if self.app_name.trim().is_empty() {
            anyhow::bail!("APP_NAME must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Application: {}", self.app_name);
        tracing::info!("  Actuator base path: {}", self.base_path);
        tracing::info!(
            "  Exposure: include='{}' exclude='{}'",
            self.expose_include,
            self.expose_exclude
        );

        match self.public_base_url {
            Some(ref url) => tracing::info!("  Public base URL: {}", url),
            None => tracing::info!("  Public base URL: from Host header"),
        }

        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Strips trailing slashes so `/actuator/` and `/actuator` mount the same routes.
fn normalize_base_path(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
