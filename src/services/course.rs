//! # Course Service
//!
//! This module is the layer between HTTP handlers and course storage. It adds
//! no business rules of its own: every call is forwarded to the repository,
//! and results are wrapped in `Option` so handlers decide what absence means.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::models::{Course, NewCourse};
use crate::repository::{CourseRepository, RepositoryError};
use crate::telemetry::metrics::record_course_created;

/// Service for course CRUD operations
#[derive(Clone)]
pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    /// Creates a new course service over the given repository.
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    /// Returns every course. The result is always `Some`, even for an empty store.
    #[instrument(skip_all)]
    pub async fn find_all(&self) -> Result<Option<Vec<Course>>, RepositoryError> {
        let courses = self.repository.find_all().await?;
        debug!(count = courses.len(), "Fetched all courses");
        Ok(Some(courses))
    }

    /// Returns the courses whose title contains `title`. Always `Some`.
    #[instrument(skip(self))]
    pub async fn find_by_title_containing(
        &self,
        title: &str,
    ) -> Result<Option<Vec<Course>>, RepositoryError> {
        let courses = self.repository.find_by_title_containing(title).await?;
        debug!(count = courses.len(), "Fetched courses by title");
        Ok(Some(courses))
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Course>, RepositoryError> {
        self.repository.find_by_id(id).await
    }

    /// Persists a new course and returns it with its store-assigned id.
    #[instrument(skip_all, fields(title = %course.title))]
    pub async fn create_course(&self, course: NewCourse) -> Result<Option<Course>, RepositoryError> {
        let created = self.repository.insert(course).await?;
        record_course_created();
        info!(course_id = %created.id, "Course created");
        Ok(Some(created))
    }

    #[instrument(skip_all)]
    pub async fn delete_all_courses(&self) -> Result<(), RepositoryError> {
        self.repository.delete_all().await
    }

    /// Deletes a course. Succeeds whether or not the course existed.
    #[instrument(skip(self))]
    pub async fn delete_course_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        self.repository.delete_by_id(id).await
    }

    /// Number of stored courses, as reported by the repository.
    #[instrument(skip_all)]
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        self.repository.count().await
    }

    /// Checks that the course store answers.
    #[instrument(skip_all)]
    pub async fn ping_store(&self) -> Result<(), RepositoryError> {
        self.repository.ping().await
    }
}
