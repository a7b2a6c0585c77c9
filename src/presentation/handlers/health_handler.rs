use axum::{extract::State, http::StatusCode};
use tracing::error;

use crate::{
    domain::{
        repositories::credential_repository::CredentialRepository,
        services::password_service::PasswordHasher,
    },
    presentation::{error::ApiError, response::ResponseEnvelope, router::AppState},
};

/// GET /ping
pub async fn ping() -> ResponseEnvelope {
    ResponseEnvelope::with_msg(StatusCode::OK, "PONG")
}

/// GET /health: probe the store without exposing why it failed
pub async fn health<R, P>(State(state): State<AppState<R, P>>) -> Result<ResponseEnvelope, ApiError>
where
    R: CredentialRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    if let Err(e) = state.repository.ping().await {
        error!(error = %e, "health check failed: database ping error");
        return Err(ApiError::ServiceUnavailable);
    }

    Ok(ResponseEnvelope::with_msg(StatusCode::OK, "OK"))
}
