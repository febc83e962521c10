use tracing::info;

use crate::services::{CanaryHealthIndicator, CourseService};

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// Course operations, backed by whichever repository the router was built with.
    pub course_service: CourseService,
    /// Liveness indicator that can be forced DOWN from the environment.
    pub canary: CanaryHealthIndicator,
}

impl AppState {
    /// Creates a new application state with the provided services.
    ///
    /// # Arguments
    ///
    /// * `course_service` - Service for course CRUD operations
    /// * `canary` - Health indicator used by the liveness endpoint
    pub fn new(course_service: CourseService, canary: CanaryHealthIndicator) -> Self {
        info!("Initializing application state");

        Self {
            course_service,
            canary,
        }
    }
}
