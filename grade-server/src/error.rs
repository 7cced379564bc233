//! Error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use grade_core::PipelineError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Request errors
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    InvalidInput(String),

    // Pipeline errors
    #[error("{0}")]
    InferenceError(String),

    #[error("{0}")]
    ArtifactError(String),

    // Generic errors
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::InferenceError(msg) => {
                tracing::error!("Inference error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Model failed to score the input")
            }
            AppError::ArtifactError(msg) => {
                tracing::error!("Artifact error: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "Prediction model unavailable")
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Shape(e) => AppError::InvalidInput(e.to_string()),
            PipelineError::Inference(e) => AppError::InferenceError(e.to_string()),
            PipelineError::ArtifactLoad(e) => AppError::ArtifactError(e.to_string()),
        }
    }
}

impl From<grade_core::ShapeError> for AppError {
    fn from(err: grade_core::ShapeError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

// Undecodable bodies, including numbers outside the field's integer type
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
