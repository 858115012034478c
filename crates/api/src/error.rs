use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use imagiq_core::envelope::ApiResponse;
use imagiq_core::error::CoreError;
use serde_json::json;

/// Failure returned by any handler.
///
/// Every variant renders as the failure envelope
/// `{ "success": false, "message": ..., "errors": { "code": ... } }`, so the
/// client's single envelope parse covers error responses too.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Malformed request that never reached the store.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An extractor refused the request (unparsable body, query or path).
    #[error("Rejected request: {message}")]
    Rejected { status: StatusCode, message: String },

    /// No route matched the request path.
    #[error("No route for {0}")]
    RouteNotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "Error interno del servidor";

impl AppError {
    /// Status, machine-readable code and user-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Core(CoreError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "CONFLICT", msg.clone())
            }
            AppError::Core(CoreError::Unauthorized(msg)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Rejected { status, message } => (*status, "INVALID_REQUEST", message.clone()),
            AppError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                "ROUTE_NOT_FOUND",
                format!("No route for {path}"),
            ),
            AppError::Core(CoreError::Internal(msg)) | AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        if status.is_client_error() {
            tracing::debug!(status = status.as_u16(), code, message = %message, "Request rejected");
        }
        let body = ApiResponse::<()>::failure(message).with_errors(json!({ "code": code }));
        (status, axum::Json(body)).into_response()
    }
}
