//! Catch-all handlers so unknown routes and methods still answer with an
//! [`crate::error::ExceptionResponse`].

use axum::http::{Method, Uri};
use tracing::{debug, instrument};

use crate::error::AppError;

/// Any path that matches no route. Answers `404 Not Found`.
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn route_not_found(uri: Uri) -> AppError {
    debug!("No route matched");
    AppError::RouteNotFound(uri.path().to_owned())
}

/// A known path requested with an unsupported method. Answers `405 Method Not Allowed`.
#[instrument(skip_all, fields(%method, path = %uri.path()))]
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    debug!("Method not supported on this route");
    AppError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_owned(),
    }
}
