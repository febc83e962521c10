//! # Course Storage
//!
//! This module defines the storage contract for courses and its two backends.
//! Handlers never talk to a backend directly; they go through
//! [`crate::services::CourseService`], which holds an `Arc<dyn CourseRepository>`.
//!
//! ## Implementations
//!
//! - [`MongoCourseRepository`] - Production backend over the `courses` collection
//! - [`InMemoryCourseRepository`] - Process-local backend for tests and local runs

mod memory;
mod mongo;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Course, NewCourse};

pub use memory::InMemoryCourseRepository;
pub use mongo::{MongoCourseRepository, connect};

/// Errors that can occur while talking to the course store
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("store assigned a non-ObjectId identifier: {0}")]
    UnexpectedId(String),
}

/// Data-access contract over the course collection.
///
/// Listing operations return courses in creation order. Identifiers that are
/// not valid ObjectIds never match anything: lookups yield `None` and deletes
/// are no-ops.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Stores a new course and returns it with its assigned identifier.
    async fn insert(&self, course: NewCourse) -> Result<Course, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Course>, RepositoryError>;

    /// Returns every course whose title contains `title` as a literal,
    /// case-sensitive substring. An empty `title` matches every course.
    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Course>, RepositoryError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, RepositoryError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError>;

    async fn delete_all(&self) -> Result<(), RepositoryError>;

    /// Number of stored courses. Backends may answer from metadata, so the
    /// value is only guaranteed exact when no writes are in flight.
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Verifies that the backing store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
