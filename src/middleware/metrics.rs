use std::time::Instant;

use axum::{extract::MatchedPath, extract::Request, middleware::Next, response::Response};
use tracing::trace;

use crate::telemetry::metrics::record_http_request;
use crate::utils::constant::UNMATCHED_ROUTE;

/// Request metrics middleware
///
/// Records one counter increment and one latency sample per request. Routes
/// are labelled by their template (`/api/courses/{id}`), not the concrete
/// path, to keep attribute cardinality bounded. Requests that match no route
/// share the [`UNMATCHED_ROUTE`] label.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());

    let response = next.run(req).await;

    let latency_seconds = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();
    trace!(%method, %route, status, latency_seconds, "Request completed");
    record_http_request(&method, &route, status, latency_seconds);

    response
}
