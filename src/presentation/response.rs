use axum::{
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Uniform JSON body of every response.
///
/// Exactly one of `msg` (success) or `error` (failure) is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub code: u16,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn with_msg(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            status: reason_phrase(status),
            msg: Some(msg.into()),
            error: None,
        }
    }

    pub fn with_error(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            status: reason_phrase(status),
            msg: None,
            error: Some(error.into()),
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self) {
            Ok(body) => (
                self.status_code(),
                [(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "failed to encode response");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
