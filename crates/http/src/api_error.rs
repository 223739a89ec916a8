//! Typed API error for HTTP handlers.
//!
//! Converts the service taxonomy into HTTP responses with JSON bodies and
//! status codes. Handlers return `Result<Json<T>, ApiError>`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tandem_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` and `ExtractionFailed` log the real error server-side and
/// return a fixed message to the client — no error detail leakage.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — invalid input from caller.
    BadRequest(String),
    /// 401 Unauthorized — no valid auth session.
    Unauthorized(String),
    /// 403 Forbidden — entity exists but is not owned by the caller.
    Forbidden(String),
    /// 404 Not Found — referenced entity absent or inaccessible.
    NotFound(String),
    /// 409 Conflict — duplicate open meeting session.
    Conflict(String),
    /// 502 Bad Gateway — the external completion API failed.
    BadGateway(String),
    /// 500 on the extraction route, which collapses every downstream
    /// failure into one generic message.
    ExtractionFailed(ServiceError),
    /// 500 Internal Server Error — unexpected failure. Details logged, not exposed.
    Internal(ServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            Self::ExtractionFailed(err) => {
                tracing::error!(error = %err, "profile extraction failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "failed to extract profile".to_owned())
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            }
        };
        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unauthenticated => Self::Unauthorized("not authenticated".to_owned()),
            ServiceError::NotFound { .. } => Self::NotFound(err.to_string()),
            ServiceError::AccessDenied { .. } => Self::Forbidden(err.to_string()),
            ServiceError::Conflict(msg) => Self::Conflict(msg),
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::ExternalService(_) => {
                Self::BadGateway("external completion service failed".to_owned())
            }
            ServiceError::Storage(_) => Self::Internal(err),
        }
    }
}
