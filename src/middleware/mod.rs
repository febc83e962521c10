//! # Middleware Components
//!
//! This module contains middleware functions that handle cross-cutting
//! concerns for every route.

pub mod metrics;

pub use metrics::track_metrics;
