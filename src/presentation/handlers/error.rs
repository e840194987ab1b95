use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{AnalysisError, DocumentServiceError, IntakeError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Error rendered as `{"detail": ...}` with the matching status code.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, detail)
            }
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<IntakeError> for ApiError {
    fn from(e: IntakeError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<DocumentServiceError> for ApiError {
    fn from(e: DocumentServiceError) -> Self {
        match e {
            DocumentServiceError::Intake(e) => e.into(),
            DocumentServiceError::UnknownCategory(_) => ApiError::BadRequest(e.to_string()),
            DocumentServiceError::NotFound(_) => ApiError::NotFound(e.to_string()),
            other => ApiError::Internal(format!("Unexpected error: {}", other)),
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(e: AnalysisError) -> Self {
        match e {
            AnalysisError::EmptyDocument => ApiError::BadRequest(e.to_string()),
            other => ApiError::Internal(format!("Analysis failed: {}", other)),
        }
    }
}
