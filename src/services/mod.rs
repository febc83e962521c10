//! # Business Logic Services
//!
//! This module contains the services used by HTTP handlers.
//!
//! ## Available Services
//!
//! - **Course** (`course`) - Course CRUD, delegating to a [`crate::repository::CourseRepository`]
//! - **Health** (`health`) - Canary indicator that lets a deployment pipeline force liveness DOWN

pub mod course;
pub mod health;

pub use course::CourseService;
pub use health::CanaryHealthIndicator;
