//! # Centralized Error Handling
//!
//! This module provides a unified error handling system for the application.
//! Every failure leaves the service as an [`ExceptionResponse`] JSON body, so
//! clients see the same shape regardless of which layer failed.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::error;

use crate::repository::RepositoryError;

/// Central application error type that encompasses all possible error conditions.
///
/// _Repository errors are logged automatically, while other errors should be
/// logged at the point of creation if needed._
#[derive(Error, Debug)]
pub enum AppError {
    #[error("repository error")]
    Repository(#[from] RepositoryError),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("bad request: {0}")]
    BadRequest(&'static str),

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("no route for {0}")]
    RouteNotFound(String),

    #[error("method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("internal server error")]
    Internal,
}

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExceptionResponse {
    /// RFC 3339 UTC time at which the error was produced
    pub timestamp: String,
    pub message: String,
    pub details: String,
}

impl ExceptionResponse {
    pub fn new(message: impl Into<String>, details: impl Into<String>) -> Self {
        let timestamp = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string());

        Self {
            timestamp,
            message: message.into(),
            details: details.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Repository(e) = &self {
            // Log detailed storage errors for internal tracking
            error!(?e, "Repository error occurred");
        }

        let (status, body) = match self {
            AppError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ExceptionResponse::new("Database error", "The course store could not be reached"),
            ),
            AppError::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                ExceptionResponse::new(
                    format!("{resource} not found"),
                    format!("No {} with id `{id}`", resource.to_ascii_lowercase()),
                ),
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ExceptionResponse::new("Bad request", msg),
            ),
            AppError::InvalidBody(rejection) => (
                rejection.status(),
                ExceptionResponse::new("Invalid request body", rejection.body_text()),
            ),
            AppError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                ExceptionResponse::new("Route not found", format!("No route matches `{path}`")),
            ),
            AppError::MethodNotAllowed { method, path } => (
                StatusCode::METHOD_NOT_ALLOWED,
                ExceptionResponse::new(
                    "Method not allowed",
                    format!("`{path}` does not accept {method}"),
                ),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ExceptionResponse::new("Internal server error", "Unexpected server failure"),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor whose rejections surface as [`AppError::InvalidBody`].
///
/// Use instead of [`axum::Json`] for request bodies so that malformed JSON,
/// missing fields and a wrong content type all produce an [`ExceptionResponse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
