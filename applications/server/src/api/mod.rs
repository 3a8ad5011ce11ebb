/// HTTP handlers
pub mod graphql;
pub mod health;

use crate::error::ServerError;
use axum::http::Uri;

/// Fallback for paths outside the API
pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(format!("No route for {}", uri.path()))
}
