//! Response envelope types shared by every endpoint.
//!
//! Success: `{ "status": "success", "count"?: n, "data": ... }`
//! Error:   `{ "status": "error", "code": "...", "message": "..." }`
//!
//! `count` appears only on collection responses and always equals the length
//! of `data`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Fixed error codes exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidId,
    NotFound,
    /// Store failure while listing the catalog.
    DbError,
    /// Store failure on every other endpoint.
    ServerError,
}

impl ErrorCode {
    /// Stable, client-facing message for this code. Never carries error detail.
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::InvalidId => "ID doit être un nombre",
            ErrorCode::NotFound => "Film non trouvé",
            ErrorCode::DbError => "Erreur de base de données",
            ErrorCode::ServerError => "Erreur interne du serveur",
        }
    }
}

/// Success envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    /// Envelope for a single object.
    pub fn one(data: T) -> Self {
        Self {
            status: Status::Success,
            count: None,
            data,
        }
    }
}

impl<T: Serialize> DataResponse<Vec<T>> {
    /// Envelope for a collection; `count` is taken from the vector.
    pub fn many(data: Vec<T>) -> Self {
        Self {
            status: Status::Success,
            count: Some(data.len()),
            data,
        }
    }
}

/// Error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: Status,
    pub code: ErrorCode,
    pub message: &'static str,
}

impl From<ErrorCode> for ErrorResponse {
    fn from(code: ErrorCode) -> Self {
        Self {
            status: Status::Error,
            code,
            message: code.message(),
        }
    }
}
