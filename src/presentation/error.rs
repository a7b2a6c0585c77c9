use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::error::{DomainError, ValidationError};
use crate::presentation::response::ResponseEnvelope;

/// Errors rendered to HTTP callers.
///
/// Each variant carries only the text that is safe to show; internal detail
/// is logged where the variant is built.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("unsupported content type")]
    UnsupportedMediaType,

    #[error("user already exists")]
    Conflict,

    // shared by "no such user" and "update failed" so reset cannot be used
    // to probe for accounts
    #[error("user not found or password update failed")]
    NotFound,

    #[error("not found")]
    RouteNotFound,

    #[error("{0}")]
    Internal(&'static str),

    #[error("service unavailable")]
    ServiceUnavailable,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Map a signup failure, logging what the caller will not see.
    pub fn from_signup(err: DomainError, username: &str) -> Self {
        match err {
            DomainError::Validation(violation) => ApiError::Validation(violation),
            DomainError::AlreadyExists => ApiError::Conflict,
            other => {
                error!(error = %other, username, "signup failed");
                ApiError::Internal("failed to create user")
            }
        }
    }

    /// Map a reset failure, logging what the caller will not see.
    pub fn from_reset(err: DomainError, username: &str) -> Self {
        match err {
            DomainError::Validation(violation) => ApiError::Validation(violation),
            DomainError::NotFound => {
                warn!(username, "password reset failed: user not found");
                ApiError::NotFound
            }
            other => {
                error!(error = %other, username, "password reset failed");
                ApiError::Internal("failed to update password")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ResponseEnvelope::with_error(self.status(), self.to_string()).into_response()
    }
}
