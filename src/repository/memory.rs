use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;
use tracing::{debug, instrument};

use super::{CourseRepository, RepositoryError};
use crate::models::{Course, NewCourse};

/// Process-local repository with the same observable behavior as the
/// MongoDB backend: ObjectId identifiers, creation ordering, literal
/// case-sensitive title matching.
#[derive(Debug, Default)]
pub struct InMemoryCourseRepository {
    courses: DashMap<ObjectId, Course>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn collect_sorted(&self, predicate: impl Fn(&Course) -> bool) -> Vec<Course> {
        let mut matching: Vec<(ObjectId, Course)> = self
            .courses
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        // ObjectIds grow with creation time, so byte order is insertion order
        matching.sort_by_key(|(id, _)| id.bytes());
        matching.into_iter().map(|(_, course)| course).collect()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    #[instrument(skip_all, fields(title = %course.title))]
    async fn insert(&self, course: NewCourse) -> Result<Course, RepositoryError> {
        let id = ObjectId::new();
        let stored = course.with_id(id.to_hex());
        self.courses.insert(id, stored.clone());

        debug!(%id, "Inserted course");
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Course>, RepositoryError> {
        Ok(self.collect_sorted(|_| true))
    }

    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Course>, RepositoryError> {
        Ok(self.collect_sorted(|course| course.title.contains(title)))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, RepositoryError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        Ok(self.courses.get(&oid).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        if let Ok(oid) = ObjectId::parse_str(id) {
            let removed = self.courses.remove(&oid).is_some();
            debug!(removed, "Processed course deletion");
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.courses.clear();
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.courses.len() as u64)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
