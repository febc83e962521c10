//! Request metrics as seen by an exporter.
//!
//! Metrics are process-global, so this binary installs its own provider once
//! and keeps to a single test.

mod common;

use std::sync::Arc;

use course_api::repository::{CourseRepository, InMemoryCourseRepository};
use course_api::telemetry::metrics::init_metrics_with_provider;
use course_api::utils::constant::UNMATCHED_ROUTE;
use opentelemetry_sdk::metrics::{PeriodicReader, SdkMeterProvider, data::Sum};
use opentelemetry_sdk::runtime;
use opentelemetry_sdk::testing::metrics::InMemoryMetricsExporter;
use serde_json::json;

use common::{post_course, serve, switchable_canary};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn requests_are_labelled_by_route_template() {
    let exporter = InMemoryMetricsExporter::default();
    let reader = PeriodicReader::builder(exporter.clone(), runtime::Tokio).build();
    let provider = SdkMeterProvider::builder().with_reader(reader).build();
    init_metrics_with_provider(provider.clone());

    let repository: Arc<dyn CourseRepository> = Arc::new(InMemoryCourseRepository::new());
    let (canary, _) = switchable_canary();
    let address = serve(repository, canary).await;
    let client = reqwest::Client::new();

    let (location, created) = post_course(
        &client,
        &address,
        &json!({"title": "Docker", "description": "Containers", "published": true}),
    )
    .await;

    let response = client
        .get(format!("{address}{location}"))
        .send()
        .await
        .expect("Failed to fetch course");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let response = client
        .get(format!("{address}/api/lessons"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    // The periodic reader flushes on the runtime, so block elsewhere
    tokio::task::spawn_blocking(move || provider.force_flush())
        .await
        .unwrap()
        .expect("Failed to flush metrics");

    let exported = exporter
        .get_finished_metrics()
        .expect("Failed to read exported metrics");
    let rendered = format!("{exported:?}");

    assert!(rendered.contains("http_server_requests_total"));
    assert!(rendered.contains("http_server_request_duration_seconds"));
    assert!(rendered.contains("\"/api/courses/{id}\""));
    assert!(rendered.contains(&format!("\"{UNMATCHED_ROUTE}\"")));
    assert!(!rendered.contains(&created.id));
    assert!(!rendered.contains("/api/lessons"));

    let courses_created = exported
        .iter()
        .flat_map(|resource| &resource.scope_metrics)
        .flat_map(|scope| &scope.metrics)
        .filter(|metric| metric.name == "courses_created_total")
        .filter_map(|metric| metric.data.as_any().downcast_ref::<Sum<u64>>())
        .flat_map(|sum| &sum.data_points)
        .map(|point| point.value)
        .max();
    assert_eq!(courses_created, Some(1));
}
