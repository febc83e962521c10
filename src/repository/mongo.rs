use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database,
    bson::{Document, doc, oid::ObjectId},
    error::Error as MongoError,
    options::ClientOptions,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{CourseRepository, RepositoryError};
use crate::models::{Course, NewCourse};
use crate::utils::{config::Settings, constant::COURSE_COLLECTION};

/// Course as stored in MongoDB, keyed by `_id`.
#[derive(Debug, Serialize, Deserialize)]
struct CourseDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    published: bool,
}

impl From<CourseDocument> for Course {
    fn from(document: CourseDocument) -> Self {
        Course {
            id: document.id.to_hex(),
            title: document.title,
            description: document.description,
            published: document.published,
        }
    }
}

/// Opens a client with the configured URI and timeouts and selects the database.
///
/// The driver connects lazily, so this succeeds even when the server is down;
/// reachability is reported by [`CourseRepository::ping`].
#[instrument(skip_all, fields(database = %settings.database_name))]
pub async fn connect(settings: &Settings) -> Result<Database, MongoError> {
    let mut options = ClientOptions::parse(&settings.mongodb_uri).await?;
    options.app_name = Some(settings.service_name.clone());
    options.server_selection_timeout = Some(settings.server_selection_timeout);

    let client = Client::with_options(options)?;
    info!("MongoDB client configured");
    Ok(client.database(&settings.database_name))
}

/// Production repository over the `courses` collection.
#[derive(Clone)]
pub struct MongoCourseRepository {
    database: Database,
    collection: Collection<CourseDocument>,
}

impl MongoCourseRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            database: database.clone(),
            collection: database.collection(COURSE_COLLECTION),
        }
    }

    async fn find_sorted(&self, filter: Document) -> Result<Vec<Course>, RepositoryError> {
        let documents: Vec<CourseDocument> = self
            .collection
            .find(filter)
            .sort(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(Course::from).collect())
    }
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    #[instrument(skip_all, fields(title = %course.title))]
    async fn insert(&self, course: NewCourse) -> Result<Course, RepositoryError> {
        let result = self
            .collection
            .clone_with_type::<NewCourse>()
            .insert_one(&course)
            .await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepositoryError::UnexpectedId(result.inserted_id.to_string()))?;

        debug!(%id, "Inserted course document");
        Ok(course.with_id(id.to_hex()))
    }

    #[instrument(skip_all)]
    async fn find_all(&self) -> Result<Vec<Course>, RepositoryError> {
        self.find_sorted(doc! {}).await
    }

    #[instrument(skip(self))]
    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Course>, RepositoryError> {
        // Escape so the query is matched literally, not as a pattern
        let pattern = regex::escape(title);
        self.find_sorted(doc! { "title": { "$regex": pattern } })
            .await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, RepositoryError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            debug!("Identifier is not an ObjectId, nothing can match");
            return Ok(None);
        };

        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(document.map(Course::from))
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            debug!("Identifier is not an ObjectId, nothing to delete");
            return Ok(());
        };

        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        debug!(deleted = result.deleted_count, "Deleted course document");
        Ok(())
    }

    #[instrument(skip_all)]
    async fn delete_all(&self) -> Result<(), RepositoryError> {
        let result = self.collection.delete_many(doc! {}).await?;
        info!(deleted = result.deleted_count, "Deleted all course documents");
        Ok(())
    }

    /// Reads the count from collection metadata instead of scanning documents.
    #[instrument(skip_all)]
    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.collection.estimated_document_count().await?)
    }

    #[instrument(skip_all)]
    async fn ping(&self) -> Result<(), RepositoryError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
