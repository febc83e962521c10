//! # Application Constants
//!
//! This module defines configuration defaults and fixed names used throughout
//! the service.

use std::time::Duration;

/// MongoDB collection holding course documents
pub const COURSE_COLLECTION: &str = "courses";

/// Environment variable whose presence forces the liveness check DOWN
///
/// Used by deployment pipelines to trigger and test automatic rollbacks.
pub const HEALTH_FAILURE_ENV_VAR: &str = "TRIGGER_HEALTH_FAILURE";

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

pub const DEFAULT_DATABASE_NAME: &str = "course_api";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8090";

/// Default service name, used in logs and as the OTLP `service.name`
pub const DEFAULT_SERVICE_NAME: &str = "course-api";

/// How long the driver waits for a suitable server before failing an operation
pub const DEFAULT_SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info,course_api=debug";

/// Instrumentation scope name of the meter
pub const METER_NAME: &str = "course-api";

/// Interval between two OTLP metric exports
pub const METRICS_EXPORT_INTERVAL: Duration = Duration::from_secs(10);

/// Route label for requests that matched no route
pub const UNMATCHED_ROUTE: &str = "unmatched";
