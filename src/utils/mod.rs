//! # Utility Modules
//!
//! This module contains configuration loading, constants and secret helpers
//! used throughout the service.
//!
//! ## Available Utilities
//!
//! - **Config** (`config`) - Environment-driven [`config::Settings`]
//! - **Constants** (`constant`) - Defaults and fixed names
//! - **Secrets** (`secret`) - Read a secret from a file or an environment variable

pub mod config;
pub mod constant;
pub mod secret;
