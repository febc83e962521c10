//! # Course Handlers
//!
//! This module implements the `/api/courses` endpoints. Each handler forwards
//! to [`crate::services::CourseService`] and maps absence to `404 Not Found`.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};
use validator::Validate;

use crate::error::{AppError, AppJson, AppResult};
use crate::models::{AppState, Course, NewCourse};

/// Query parameters accepted by the course listing endpoint
#[derive(Debug, Deserialize)]
pub struct CourseQuery {
    /// Only return courses whose title contains this substring
    pub title: Option<String>,
}

/// Lists courses, optionally filtered by title.
///
/// GET /api/courses?title=<substring>
///
/// # Returns
///
/// - `200 OK` with a JSON array, possibly empty
/// - `500 Internal Server Error` - Database error
#[instrument(
    skip_all,
    fields(
        title = ?query.title,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn list_courses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CourseQuery>,
) -> AppResult<Json<Vec<Course>>> {
    debug!("Processing list courses request");

    let courses = match query.title.as_deref() {
        Some(title) => state.course_service.find_by_title_containing(title).await?,
        None => state.course_service.find_all().await?,
    }
    .unwrap_or_default();

    info!(count = courses.len(), "Courses retrieved successfully");
    Ok(Json(courses))
}

/// Creates a new course.
///
/// POST /api/courses NewCourse
///
/// # Returns
///
/// - `201 Created` with the stored course and a `Location` header pointing at it
/// - `400 Bad Request` - Empty title or malformed JSON
/// - `415 Unsupported Media Type` - Body is not `application/json`
/// - `422 Unprocessable Entity` - Missing `title` or wrongly typed fields
/// - `500 Internal Server Error` - Database error
#[instrument(
    skip_all,
    fields(
        title = %payload.title,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn create_course(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<NewCourse>,
) -> AppResult<impl IntoResponse> {
    debug!("Processing create course request");

    if payload.validate().is_err() {
        warn!("Course title is empty");
        return Err(AppError::BadRequest("title must not be empty"));
    }

    let Some(course) = state.course_service.create_course(payload).await? else {
        error!("Course service returned no stored course");
        return Err(AppError::Internal);
    };

    let location = format!("/api/courses/{}", course.id);
    info!(%location, "Course created successfully");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(course)))
}

/// Retrieves a single course.
///
/// GET /api/courses/{id}
///
/// # Returns
///
/// - `200 OK` with the course
/// - `404 Not Found` - No course with this id
/// - `500 Internal Server Error` - Database error
#[instrument(skip(state), fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn get_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Course>> {
    debug!("Processing get course request");

    match state.course_service.find_by_id(&id).await? {
        Some(course) => {
            info!("Course retrieved successfully");
            Ok(Json(course))
        }
        None => {
            warn!("Course not found");
            Err(AppError::NotFound {
                resource: "Course",
                id,
            })
        }
    }
}

/// Deletes a single course.
///
/// DELETE /api/courses/{id}
///
/// # Returns
///
/// - `204 No Content` - Whether or not the course existed
/// - `500 Internal Server Error` - Database error
#[instrument(skip(state), fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn delete_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.course_service.delete_course_by_id(&id).await?;
    info!("Course deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes every course.
///
/// DELETE /api/courses
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn delete_all_courses(State(state): State<Arc<AppState>>) -> AppResult<StatusCode> {
    state.course_service.delete_all_courses().await?;
    info!("All courses deleted");
    Ok(StatusCode::NO_CONTENT)
}
