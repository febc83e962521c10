//! Tracing subscriber setup.
//!
//! Production emits bunyan-formatted JSON lines on stdout; development uses
//! the human-readable formatter. Both honor `RUST_LOG`.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::utils::{config::AppEnv, constant::DEFAULT_LOG_FILTER};

/// Initialize tracing with the given service name.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn init_tracing(service_name: &str, app_env: AppEnv) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match app_env {
        AppEnv::Production => {
            let formatting_layer =
                BunyanFormattingLayer::new(service_name.to_string(), std::io::stdout);
            tracing_subscriber::registry()
                .with(filter)
                .with(JsonStorageLayer)
                .with(formatting_layer)
                .init();
        }
        AppEnv::Development => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .init();
        }
    }

    tracing::info!(service = service_name, env = %app_env, "Tracing initialized");
}
