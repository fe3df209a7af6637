use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use services::services::{project::ProjectServiceError, task::TaskServiceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Project(#[from] ProjectServiceError),
    #[error(transparent)]
    Task(#[from] TaskServiceError),
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    status_code: u16,
    error: &'static str,
    message: String,
}

/// The single error-kind-to-status table consulted at the HTTP boundary.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::Project(err) => match err {
                ProjectServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ProjectServiceError::Validation(_) => StatusCode::BAD_REQUEST,
                ProjectServiceError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Task(err) => match err {
                TaskServiceError::NotFound(_) | TaskServiceError::ProjectNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                TaskServiceError::Validation(_) => StatusCode::BAD_REQUEST,
                TaskServiceError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self, "API request failed");
        }

        let body = ErrorBody {
            status_code: status_code.as_u16(),
            error: status_code.canonical_reason().unwrap_or("Error"),
            message: self.to_string(),
        };
        (status_code, Json(body)).into_response()
    }
}
