//! API error types with IntoResponse
//!
//! Validation failures answer 422 with a JSON `{"error": ...}` body;
//! everything else is plain text, matching the original wire contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body failed validation (422, JSON body)
    Validation(ValidationError),

    /// Path id is not an integer (400, plain text)
    BadId { message: &'static str },

    /// Resource not found (404, plain text)
    NotFound { message: &'static str },

    /// Persistence failure (500, logged, generic plain text)
    Database {
        message: &'static str,
        source: DbError,
    },
}

impl ApiError {
    /// Adapter for `map_err` on repository calls: attaches the
    /// operation's client-facing message to a database error.
    pub fn db(message: &'static str) -> impl FnOnce(DbError) -> Self {
        move |source| Self::Database { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response(),
            Self::BadId { message } => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::NotFound { message } => (StatusCode::NOT_FOUND, message).into_response(),
            Self::Database { message, source } => {
                // Log the actual error, return the generic message
                tracing::error!("Database error: {}", source);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_is_422_json() {
        let err = ApiError::Validation(ValidationError::Empty { field: "title" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "\"title\" is not allowed to be empty");
    }

    #[tokio::test]
    async fn bad_id_is_400_plain() {
        let err = ApiError::BadId {
            message: "Invalid movie ID",
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Invalid movie ID");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound {
            message: "Movie not found",
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn database_error_is_500_with_generic_body() {
        let err = ApiError::Database {
            message: "Error retrieving data from the database",
            source: DbError::Sqlx(sqlx::Error::PoolClosed),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Error retrieving data from the database");
    }
}
