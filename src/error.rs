//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Fixed entry returned for every rejected restaurant-pizza payload.
pub const VALIDATION_ERRORS: &str = "validation errors";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Required field absent from a restaurant or pizza payload.
    #[error("Invalid data")]
    InvalidData,
    /// Restaurant-pizza payload rejected. The reason is logged, never returned.
    #[error("validation: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Body exceeded the configured size limit while buffering.
    #[error("Payload too large")]
    PayloadTooLarge,
    #[error("{0}")]
    Db(#[from] sqlx::Error),
    #[error("{0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidData => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": self.to_string() }))).into_response()
            }
            AppError::Validation(reason) => {
                tracing::debug!(reason = %reason, "rejected restaurant pizza");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "errors": [VALIDATION_ERRORS] })),
                )
                    .into_response()
            }
            AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": self.to_string() }))).into_response()
            }
            AppError::PayloadTooLarge => {
                (StatusCode::PAYLOAD_TOO_LARGE, Json(json!({ "error": self.to_string() }))).into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": self.to_string() })),
                )
                    .into_response()
            }
            AppError::Serialization(e) => {
                tracing::error!(error = %e, "serialization error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": self.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
