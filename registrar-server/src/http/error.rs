//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Validation never reaches storage; conflicts and outages come back
//! from the database layer and map to 409 and 503 respectively.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Uniqueness constraint violated (409)
    Conflict { field: &'static str },

    /// Storage backend unreachable (503, logged)
    Unavailable(sqlx::Error),

    /// Database error (500, logged)
    Database(sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::Conflict { field } => (
                StatusCode::CONFLICT,
                json!({
                    "error": "conflict",
                    "message": format!("{} already registered", field)
                }),
            ),
            Self::Unavailable(e) => {
                tracing::error!("Storage unavailable: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({
                        "error": "storage_unavailable",
                        "message": "storage is temporarily unavailable"
                    }),
                )
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Conflict { field } => Self::Conflict { field },
            DbError::Unavailable(e) => Self::Unavailable(e),
            DbError::Sqlx(e) => Self::Database(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Missing fields and unparseable dates surface here, before
        // any storage interaction
        Self::Validation(ValidationError::Malformed {
            reason: rejection.body_text(),
        })
    }
}
