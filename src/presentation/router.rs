use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
};
use tower::ServiceBuilder;

use crate::{
    domain::{
        repositories::credential_repository::CredentialRepository,
        services::password_service::PasswordHasher,
    },
    presentation::{
        form::MAX_BODY_BYTES,
        handlers::{credential_handler, health_handler},
        middleware::{log_request, request_id, security_headers},
    },
    usecase::{reset_password_usecase::ResetPasswordUsecase, signup_usecase::SignupUsecase},
};

#[derive(Clone)]
pub struct AppState<R: CredentialRepository, P: PasswordHasher> {
    pub signup_service: Arc<SignupUsecase<R, P>>,
    pub reset_service: Arc<ResetPasswordUsecase<R, P>>,
    pub repository: R,
}

/// Build the application router.
///
/// Every route, including the fallbacks, runs behind the same stage chain:
/// security headers, then request id, then request logging.
pub fn create_router<R, P>(repository: R, password_hasher: P) -> Router
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
    P: PasswordHasher + Send + Sync + 'static,
{
    let state = AppState {
        signup_service: Arc::new(SignupUsecase::new(
            repository.clone(),
            password_hasher.clone(),
        )),
        reset_service: Arc::new(ResetPasswordUsecase::new(
            repository.clone(),
            password_hasher,
        )),
        repository,
    };

    Router::new()
        .route(
            "/ping",
            get(health_handler::ping)
                .head(credential_handler::method_not_allowed)
                .fallback(credential_handler::method_not_allowed),
        )
        .route(
            "/health",
            get(health_handler::health::<R, P>)
                .head(credential_handler::method_not_allowed)
                .fallback(credential_handler::method_not_allowed),
        )
        .route(
            "/signup",
            post(credential_handler::signup::<R, P>)
                .fallback(credential_handler::method_not_allowed),
        )
        .route(
            "/reset",
            put(credential_handler::reset::<R, P>)
                .fallback(credential_handler::method_not_allowed),
        )
        .fallback(credential_handler::route_not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(security_headers())
                .layer(middleware::from_fn(request_id))
                .layer(middleware::from_fn(log_request)),
        )
}
