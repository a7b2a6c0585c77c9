use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::{
    domain::{
        error::DomainError,
        repositories::credential_repository::CredentialRepository,
        services::{
            credential_policy::{validate_password, validate_username},
            password_service::PasswordHasher,
        },
    },
    usecase::hash_password,
};

pub struct ResetPasswordUsecase<R: CredentialRepository, P: PasswordHasher> {
    credential_repository: R,
    password_hasher: P,
}

impl<R: CredentialRepository, P: PasswordHasher> ResetPasswordUsecase<R, P> {
    pub fn new(credential_repository: R, password_hasher: P) -> Self {
        Self {
            credential_repository,
            password_hasher,
        }
    }

    /// Replace the stored hash of an existing account.
    ///
    /// An unknown username yields `DomainError::NotFound`; callers facing the
    /// outside world must not render it differently from other failures.
    #[instrument(skip(self, password))]
    pub async fn reset(&self, username: &str, password: SecretString) -> Result<(), DomainError>
    where
        R: Send + Sync,
        P: Send + Sync + 'static,
    {
        let username = username.trim();
        validate_username(username)?;
        validate_password(password.expose_secret())?;

        let password_hash = hash_password(&self.password_hasher, password).await?;

        self.credential_repository
            .replace_if_exists(username, &password_hash, Utc::now().timestamp())
            .await?;

        debug!("password replaced");
        Ok(())
    }
}
