use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use speedai_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and implements [`IntoResponse`]. The wire shape is
/// `{ "message": string }` — the inherited client contract renders the
/// message verbatim, so user-facing messages are French.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `speedai_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { message } => {
                    (StatusCode::NOT_FOUND, (*message).to_string())
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Une erreur interne est survenue".to_string(),
                    )
                }
            },
        };

        let body = json!({ "message": message });

        (status, axum::Json(body)).into_response()
    }
}
