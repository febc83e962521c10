//! # Health Check Handlers
//!
//! Liveness and readiness endpoints for load balancers, orchestrators and
//! deployment tools.

use std::sync::Arc;

use axum::extract::State;
use tracing::{debug, error, instrument};

use crate::models::{AppState, Health};

/// Liveness endpoint.
///
/// Returns `200 OK` with `{"status":"UP"}` while the process is serving
/// requests, or `503 Service Unavailable` with a reason when the canary
/// failure trigger is set. Performs no database checks.
#[instrument(skip_all)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Health {
    debug!("Health check endpoint accessed");
    state.canary.health()
}

/// Readiness endpoint.
///
/// Same as [`health_check`], and additionally reports DOWN when the course
/// store does not answer a ping.
#[instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> Health {
    debug!("Readiness check endpoint accessed");

    let liveness = state.canary.health();
    if !liveness.is_up() {
        return liveness;
    }

    if let Err(e) = state.course_service.ping_store().await {
        error!(error = %e, "Course store is unreachable");
        return Health::down().with_detail("database", "unreachable");
    }

    match state.course_service.count().await {
        Ok(count) => Health::up()
            .with_detail("database", "reachable")
            .with_detail("courses", count.to_string()),
        Err(e) => {
            error!(error = %e, "Failed to count courses");
            Health::down().with_detail("database", "unreachable")
        }
    }
}
