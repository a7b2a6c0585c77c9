use axum::{
    extract::{Request, State},
    http::StatusCode,
};
use secrecy::ExposeSecret;

use crate::{
    domain::{
        repositories::credential_repository::CredentialRepository,
        services::{
            credential_policy::{validate_password, validate_username},
            password_service::PasswordHasher,
        },
    },
    presentation::{
        error::ApiError, form::CredentialForm, response::ResponseEnvelope, router::AppState,
    },
};

/// POST /signup
pub async fn signup<R, P>(
    State(state): State<AppState<R, P>>,
    request: Request,
) -> Result<ResponseEnvelope, ApiError>
where
    R: CredentialRepository + Send + Sync,
    P: PasswordHasher + Send + Sync + 'static,
{
    let form = CredentialForm::extract(request).await?;
    validate_username(&form.username)?;
    validate_password(form.password.expose_secret())?;

    state
        .signup_service
        .signup(&form.username, form.password)
        .await
        .map_err(|e| ApiError::from_signup(e, &form.username))?;

    Ok(ResponseEnvelope::with_msg(
        StatusCode::CREATED,
        "Signup Successful",
    ))
}

/// PUT /reset
pub async fn reset<R, P>(
    State(state): State<AppState<R, P>>,
    request: Request,
) -> Result<ResponseEnvelope, ApiError>
where
    R: CredentialRepository + Send + Sync,
    P: PasswordHasher + Send + Sync + 'static,
{
    let form = CredentialForm::extract(request).await?;
    validate_username(&form.username)?;
    validate_password(form.password.expose_secret())?;

    state
        .reset_service
        .reset(&form.username, form.password)
        .await
        .map_err(|e| ApiError::from_reset(e, &form.username))?;

    Ok(ResponseEnvelope::with_msg(StatusCode::OK, "Password Updated"))
}

/// Fallback for known paths hit with the wrong verb
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Fallback for unknown paths
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
