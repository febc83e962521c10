//! OpenTelemetry metrics for the HTTP surface and course creation.
//!
//! Key metrics:
//! - http_server_requests_total: Counter of handled requests
//! - http_server_request_duration_seconds: Histogram of request latency
//! - courses_created_total: Counter of stored courses

use std::sync::OnceLock;

use opentelemetry::metrics::{Counter, Histogram, Meter};
use opentelemetry::{KeyValue, global};
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::metrics::{ManualReader, SdkMeterProvider};
use tracing::{info, warn};

use crate::utils::constant::{METER_NAME, METRICS_EXPORT_INTERVAL};

/// Global metrics instance.
static METRICS: OnceLock<Metrics> = OnceLock::new();

/// Provider kept for flushing on shutdown.
static PROVIDER: OnceLock<SdkMeterProvider> = OnceLock::new();

/// Course API metrics registry.
#[derive(Debug)]
pub struct Metrics {
    /// Total number of handled HTTP requests.
    pub http_requests: Counter<u64>,
    /// Histogram of HTTP request latency in seconds.
    pub http_request_duration: Histogram<f64>,
    /// Total number of courses stored.
    pub courses_created: Counter<u64>,
}

impl Metrics {
    fn new(meter: &Meter) -> Self {
        Self {
            http_requests: meter
                .u64_counter("http_server_requests_total")
                .with_description("Total number of handled HTTP requests")
                .with_unit("1")
                .init(),
            http_request_duration: meter
                .f64_histogram("http_server_request_duration_seconds")
                .with_description("Time from request arrival to response")
                .with_unit("s")
                .init(),
            courses_created: meter
                .u64_counter("courses_created_total")
                .with_description("Total number of courses created")
                .with_unit("1")
                .init(),
        }
    }
}

fn local_provider() -> SdkMeterProvider {
    let reader = ManualReader::builder().build();
    SdkMeterProvider::builder().with_reader(reader).build()
}

/// Initialize the metrics system.
///
/// This should be called once at startup. Subsequent calls are ignored.
///
/// # Arguments
///
/// * `service_name` - Reported as the `service.name` resource attribute
/// * `otel_endpoint` - Optional OTLP endpoint for metrics export. Without it
///   metrics are recorded but never leave the process.
pub fn init_metrics_with_endpoint(service_name: &str, otel_endpoint: Option<&str>) {
    if METRICS.get().is_some() {
        return;
    }

    let provider = if let Some(endpoint) = otel_endpoint {
        use opentelemetry_otlp::{Protocol, WithExportConfig};

        let exporter = opentelemetry_otlp::new_exporter()
            .tonic()
            .with_endpoint(endpoint)
            .with_protocol(Protocol::Grpc);

        match opentelemetry_otlp::new_pipeline()
            .metrics(opentelemetry_sdk::runtime::Tokio)
            .with_exporter(exporter)
            .with_resource(Resource::new(vec![KeyValue::new(
                "service.name",
                service_name.to_string(),
            )]))
            .with_period(METRICS_EXPORT_INTERVAL)
            .build()
        {
            Ok(provider) => {
                info!(endpoint, "OTLP metrics exporter configured");
                provider
            }
            Err(e) => {
                warn!(error = %e, "Failed to create OTLP exporter, keeping metrics local");
                local_provider()
            }
        }
    } else {
        local_provider()
    };

    init_metrics_with_provider(provider);
}

/// Initialize the metrics system on top of an already built provider.
///
/// Installs `provider` as the global meter provider and registers the
/// instruments. Ignored if metrics are already initialized.
pub fn init_metrics_with_provider(provider: SdkMeterProvider) {
    METRICS.get_or_init(|| {
        global::set_meter_provider(provider.clone());
        let _ = PROVIDER.set(provider);

        let meter = global::meter(METER_NAME);
        Metrics::new(&meter)
    });
}

/// Initialize the metrics system without OTLP export.
pub fn init_metrics() {
    init_metrics_with_endpoint(METER_NAME, None);
}

/// Flushes pending metrics and stops the exporter, if one was started.
pub fn shutdown_metrics() {
    if let Some(provider) = PROVIDER.get()
        && let Err(e) = provider.shutdown()
    {
        warn!(error = %e, "Failed to shut down meter provider");
    }
}

/// Record a handled HTTP request. No-op until metrics are initialized.
pub fn record_http_request(method: &str, route: &str, status: u16, latency_seconds: f64) {
    if let Some(m) = METRICS.get() {
        let attrs = [
            KeyValue::new("method", method.to_string()),
            KeyValue::new("route", route.to_string()),
            KeyValue::new("status", i64::from(status)),
        ];
        m.http_requests.add(1, &attrs);
        m.http_request_duration.record(latency_seconds, &attrs);
    }
}

/// Record a stored course. No-op until metrics are initialized.
pub fn record_course_created() {
    if let Some(m) = METRICS.get() {
        m.courses_created.add(1, &[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_metrics_is_idempotent() {
        init_metrics();
        init_metrics();
        assert!(METRICS.get().is_some());
        assert!(PROVIDER.get().is_some());
    }
}
