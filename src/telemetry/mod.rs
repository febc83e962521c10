//! Observability infrastructure.
//!
//! Provides:
//! - Structured logging through `tracing` (`logging`)
//! - OpenTelemetry metrics with optional OTLP export (`metrics`)

pub mod logging;
pub mod metrics;
