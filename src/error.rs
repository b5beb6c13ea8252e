// Error handling for linkforge

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::domain::template::ExpansionError;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest { kind: &'static str, message: String },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest { message, .. } => write!(f, "Bad request: {}", message),
        }
    }
}

impl std::error::Error for AppError {}

// Implement IntoResponse so Axum can convert errors to HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            AppError::BadRequest { kind, message } => (StatusCode::BAD_REQUEST, kind, message),
        };

        tracing::warn!(status = status.as_u16(), kind, "request rejected: {}", message);

        (status, Json(json!({ "error": kind, "message": message }))).into_response()
    }
}

// Every expansion failure is a caller error
impl From<ExpansionError> for AppError {
    fn from(err: ExpansionError) -> Self {
        AppError::BadRequest {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
