//! Handlers for requests that match no route or no method.

use axum::extract::OriginalUri;
use axum::http::Method;

use crate::error::AppError;

/// Any path outside the route table. Reports the full path, even when
/// reached from inside a nested router.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

/// A known path requested with an unsupported method.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method.to_string())
}
