//! # Course API - Course Catalogue Backend
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for course and health endpoints
//! - [`middleware`] - Request metrics middleware
//! - [`models`] - Course records, health reports and shared application state
//! - [`repository`] - Course storage backends (MongoDB and in-memory)
//! - [`services`] - Course service and canary health indicator
//! - [`telemetry`] - Logging subscriber and OpenTelemetry metrics setup
//! - [`utils`] - Configuration, constants and secret loading

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod services;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use axum::{Router, middleware::from_fn, routing::get};
use mongodb::Database;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers::{
    create_course, delete_all_courses, delete_course, get_course, health_check, list_courses,
    method_not_allowed, readiness_check, route_not_found,
};
use crate::middleware::track_metrics;
use crate::models::AppState;
use crate::repository::{CourseRepository, MongoCourseRepository};
use crate::services::{CanaryHealthIndicator, CourseService};

/// Creates an Axum router backed by the `courses` collection of the given MongoDB database.
///
/// This is a convenience function that calls [`app_with_repository`] with a
/// [`MongoCourseRepository`] and the default canary health indicator.
#[inline]
pub fn app(database: Database) -> Router {
    app_with_repository(Arc::new(MongoCourseRepository::new(&database)), None)
}

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `repository` - Storage backend for courses
/// * `canary` - Optional custom health indicator. If None, liveness watches
///   the `TRIGGER_HEALTH_FAILURE` environment variable
///
/// # Returns
///
/// A configured Axum router with all application routes and middleware
pub fn app_with_repository(
    repository: Arc<dyn CourseRepository>,
    canary: Option<CanaryHealthIndicator>,
) -> Router {
    let canary = canary.unwrap_or_default();
    info!(
        failure_env_var = canary.failure_env_var(),
        "Building application router"
    );

    let state = Arc::new(AppState::new(CourseService::new(repository), canary));

    let course_routes = Router::new()
        .route(
            "/api/courses",
            get(list_courses)
                .post(create_course)
                .delete(delete_all_courses),
        )
        .route("/api/courses/{id}", get(get_course).delete(delete_course));

    let health_routes = Router::new()
        .route("/health-check", get(health_check))
        .route("/health-check/readiness", get(readiness_check));

    Router::new()
        .merge(health_routes)
        .merge(course_routes)
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
