#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to exactly one terminal response; bodies keep the flat
/// `{"error": "<message>"}` shape the wizard client expects.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Daily draft limit reached")]
    RateLimited,

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Draft failed validation: {0}")]
    DraftInvalid(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "You've reached the daily limit (10 strategies). Come back tomorrow!".to_string(),
            ),
            AppError::Generation(detail) => {
                tracing::error!("Strategy generation failed: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Strategy generation failed. Please try again. ({detail})"),
                )
            }
            AppError::DraftInvalid(detail) => {
                tracing::error!("Draft failed structural validation: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Strategy generation failed. Please try again. ({detail})"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Strategy generation failed. Please try again. (internal error)".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
