use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::validation::{FieldErrors, ValidationError};

#[derive(Debug)]
pub enum AppError {
    ValidationError(FieldErrors),
    /// Body is not a JSON object
    MalformedBody(String),
    /// The message is shown to the user as-is; details are logged
    PredictionError(String, String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::ValidationError(fields) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "validation failed", "fields": fields }),
            ),
            AppError::MalformedBody(detail) => {
                tracing::debug!("Rejected request body: {}", detail);
                (StatusCode::BAD_REQUEST, json!({ "error": "request body must be a JSON object" }))
            }
            AppError::PredictionError(message, detail) => {
                tracing::error!("Prediction error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::ValidationError(err.0)
    }
}

impl From<zehvraat_model::ModelError> for AppError {
    fn from(err: zehvraat_model::ModelError) -> Self {
        Self::PredictionError("Failed to make jewelry price prediction".to_string(), err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}
