//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers of the service.
//! Each handler is responsible for processing specific HTTP requests and returning
//! appropriate responses.
//!
//! ## Available Handlers
//!
//! - **Course** (`course`) - Create, list, search, fetch and delete courses
//! - **Health Check** (`health_check`) - Liveness and readiness monitoring
//! - **Fallback** (`fallback`) - Error bodies for unknown routes and methods

mod course;
mod fallback;
mod health_check;

pub use course::*;
pub use fallback::*;
pub use health_check::*;
