use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use usersync_types::ErrorResponse;

use crate::error::ServiceError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => ApiError::NotFound("User not found".to_string()),
            ServiceError::Conflict(_) => ApiError::BadRequest("User already exists.".to_string()),
            ServiceError::Fetch(e) => {
                tracing::error!("Remote fetch failed: {:#}", e);
                ApiError::InternalError("Failed to load data.".to_string())
            }
            ServiceError::Storage(e) => {
                tracing::error!("Internal error: {:#}", e);
                ApiError::InternalError("Internal server error".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_status_mapping() {
        let cases = [
            (ServiceError::NotFound(1), StatusCode::NOT_FOUND),
            (ServiceError::Conflict(1), StatusCode::BAD_REQUEST),
            (
                ServiceError::Fetch(anyhow::anyhow!("offline")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ServiceError::Storage(anyhow::anyhow!("disk")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }
}
