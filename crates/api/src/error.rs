use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinematic_core::error::CoreError;
use cinematic_db::StoreError;

use crate::response::{ErrorCode, ErrorResponse};

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the error envelope. Store failures
/// are logged in full here and reach the client only as a coded message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinematic_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Store failure while listing the whole catalog (`DB_ERROR`).
    #[error("Catalog listing failed: {0}")]
    Listing(#[source] StoreError),

    /// Store failure on any other endpoint (`SERVER_ERROR`).
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status and client-facing code for this error.
    pub fn classify(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::Core(CoreError::InvalidIdentifier(_)) => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidId)
            }
            AppError::Core(CoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, ErrorCode::NotFound)
            }
            AppError::Core(CoreError::Internal(_)) | AppError::Store(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::ServerError)
            }
            AppError::Listing(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DbError),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.classify();

        if status.is_server_error() {
            tracing::error!(error = %self, code = ?code, "Request failed");
        } else {
            tracing::debug!(error = %self, code = ?code, "Request rejected");
        }

        (status, axum::Json(ErrorResponse::from(code))).into_response()
    }
}
