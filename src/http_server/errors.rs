//! # HTTP Errors
//!
//! Boundary-layer errors and their JSON rendering.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::book::StoreError;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path id is not a UUID
    #[error("Invalid book id: {0}")]
    InvalidId(String),

    /// Body is not valid JSON or does not have the book shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Query string does not deserialize
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Supplied name is the empty string
    #[error("Book name must not be empty")]
    EmptyName,

    /// PATCH body id disagrees with the path id
    #[error("Body id {body} does not match path id {path}")]
    IdMismatch { path: Uuid, body: Uuid },

    /// The store could not build a complete record
    #[error("{0}")]
    Store(#[from] StoreError),

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::EmptyName => StatusCode::BAD_REQUEST,
            ApiError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::PatchWithoutName(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

/// Parse an id in the hyphenated `8-4-4-4-12` form only
///
/// `Uuid::try_parse` also takes the simple, braced and URN forms, which the
/// API does not accept.
pub fn parse_hyphenated(raw: &str) -> Option<Uuid> {
    let bytes = raw.as_bytes();
    if bytes.len() != 36 {
        return None;
    }
    let shaped = bytes.iter().enumerate().all(|(i, b)| match i {
        8 | 13 | 18 | 23 => *b == b'-',
        _ => b.is_ascii_hexdigit(),
    });
    if !shaped {
        return None;
    }
    Uuid::try_parse(raw).ok()
}

/// Parse a path id
pub fn parse_id(raw: &str) -> ApiResult<Uuid> {
    parse_hyphenated(raw).ok_or_else(|| ApiError::InvalidId(raw.to_string()))
}
