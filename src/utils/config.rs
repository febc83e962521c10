//! # Runtime Configuration
//!
//! Settings are read once at startup from environment variables (optionally
//! loaded from `.env` by the binary).
//!
//! ## Environment Variables
//!
//! - `MONGODB_URI` / `MONGODB_URI_FILE` - Connection string, or a file holding it
//! - `MONGODB_DATABASE` - Database name
//! - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` - Driver server selection timeout
//! - `BIND_ADDRESS` - Listen address, e.g. `0.0.0.0:8090`
//! - `APP_ENV` - "production" switches logs to bunyan JSON
//! - `OTEL_EXPORTER_OTLP_ENDPOINT` - OTLP gRPC endpoint for metrics export
//! - `OTEL_SERVICE_NAME` - Service name reported in logs and metrics

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use tracing::{error, warn};

use crate::utils::constant::*;
use crate::utils::secret::get_secret;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDRESS `{value}`: {source}")]
    InvalidBindAddress {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("production") => AppEnv::Production,
            _ => AppEnv::Development,
        }
    }
}

impl std::fmt::Display for AppEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let env_str = match self {
            AppEnv::Development => "development",
            AppEnv::Production => "production",
        };
        write!(f, "{env_str}")
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub mongodb_uri: String,
    pub database_name: String,
    pub server_selection_timeout: Duration,
    pub bind_address: SocketAddr,
    pub app_env: AppEnv,
    pub otlp_endpoint: Option<String>,
    pub service_name: String,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps variable names to values.
    ///
    /// Missing or unparsable optional values fall back to their defaults;
    /// only an unparsable bind address is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mongodb_uri = get_secret(&lookup, "MONGODB_URI_FILE", "MONGODB_URI")
            .unwrap_or_else(|| {
                warn!("Missing MONGODB_URI, using fallback '{DEFAULT_MONGODB_URI}'");
                DEFAULT_MONGODB_URI.to_string()
            });

        let database_name =
            lookup("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

        let server_selection_timeout = match lookup("MONGODB_SERVER_SELECTION_TIMEOUT_SECS") {
            None => DEFAULT_SERVER_SELECTION_TIMEOUT,
            Some(raw) => raw.parse::<u64>().map(Duration::from_secs).unwrap_or_else(|_| {
                error!(
                    %raw,
                    "Invalid MONGODB_SERVER_SELECTION_TIMEOUT_SECS env var, using fallback {}s",
                    DEFAULT_SERVER_SELECTION_TIMEOUT.as_secs()
                );
                DEFAULT_SERVER_SELECTION_TIMEOUT
            }),
        };

        let raw_bind = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address: SocketAddr = raw_bind
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddress {
                value: raw_bind.clone(),
                source,
            })?;

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.trim().is_empty());

        let service_name =
            lookup("OTEL_SERVICE_NAME").unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());

        Ok(Self {
            mongodb_uri,
            database_name,
            server_selection_timeout,
            bind_address,
            app_env: AppEnv::parse(lookup("APP_ENV").as_deref()),
            otlp_endpoint,
            service_name,
        })
    }
}
