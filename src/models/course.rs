//! # Course Records
//!
//! The single domain entity of the service. [`Course`] is the stored record
//! as clients see it; [`NewCourse`] is the creation payload before the store
//! has assigned an identifier.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Store-assigned identifier, 24 lowercase hex characters
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub published: bool,
}

/// Request payload for creating a course.
///
/// An `id` field sent by the client is ignored; identifiers are always
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewCourse {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published: bool,
}

impl NewCourse {
    pub fn new(title: impl Into<String>, description: Option<&str>, published: bool) -> Self {
        Self {
            title: title.into(),
            description: description.map(str::to_owned),
            published,
        }
    }

    /// Attaches a store-assigned identifier, producing the stored record.
    pub fn with_id(self, id: String) -> Course {
        Course {
            id,
            title: self.title,
            description: self.description,
            published: self.published,
        }
    }
}
