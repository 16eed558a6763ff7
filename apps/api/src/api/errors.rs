use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::DeveloperError;

/// API error type with HTTP status code, stable error code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER_ERROR",
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "code": self.code,
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<DeveloperError> for ApiError {
    fn from(err: DeveloperError) -> Self {
        let status = match &err {
            DeveloperError::LevelExperienceMismatch { .. } | DeveloperError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            DeveloperError::DuplicateMemberId(_) => StatusCode::CONFLICT,
            DeveloperError::NotFound(_) => StatusCode::NOT_FOUND,
            DeveloperError::Storage(detail) => {
                tracing::error!(error = %detail, "Storage failure");
                return Self::internal_server_error("Internal server error");
            }
        };

        Self::new(status, err.code(), err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::from(DeveloperError::InvalidRequest(rejection.body_text()))
    }
}
