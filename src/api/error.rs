use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::db::StoreError;

/// API-boundary error. The body shapes are part of the wire contract:
/// missing resources answer `{"error": msg}`, rejected writes answer
/// `{"errors": [msgs]}`.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    Validation(Vec<String>),

    DatabaseError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Validation(msgs) => write!(f, "Validation failed: {}", msgs.join("; ")),
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
            }
            Self::Validation(msgs) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": msgs }))).into_response()
            }
            Self::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "A database error occurred" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(e) => Self::Validation(vec![e.to_string()]),
            StoreError::Db(e) => Self::DatabaseError(e.to_string()),
        }
    }
}

impl ApiError {
    pub fn not_found(resource: &str) -> Self {
        Self::NotFound(format!("{resource} not found"))
    }

    pub fn hero_not_found() -> Self {
        Self::not_found("Hero")
    }

    pub fn power_not_found() -> Self {
        Self::not_found("Power")
    }

    pub fn episode_not_found() -> Self {
        Self::not_found("Episode")
    }
}
