use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::{
    domain::{
        error::DomainError,
        models::credential::Credential,
        repositories::credential_repository::CredentialRepository,
        services::{
            credential_policy::{validate_password, validate_username},
            password_service::PasswordHasher,
        },
    },
    usecase::hash_password,
};

pub struct SignupUsecase<R: CredentialRepository, P: PasswordHasher> {
    credential_repository: R,
    password_hasher: P,
}

impl<R: CredentialRepository, P: PasswordHasher> SignupUsecase<R, P> {
    pub fn new(credential_repository: R, password_hasher: P) -> Self {
        Self {
            credential_repository,
            password_hasher,
        }
    }

    /// Validate, hash and store a new credential.
    ///
    /// A username that is already taken yields `DomainError::AlreadyExists`;
    /// the existing record is never overwritten.
    #[instrument(skip(self, password))]
    pub async fn signup(&self, username: &str, password: SecretString) -> Result<(), DomainError>
    where
        R: Send + Sync,
        P: Send + Sync + 'static,
    {
        let username = username.trim();
        validate_username(username)?;
        validate_password(password.expose_secret())?;

        let password_hash = hash_password(&self.password_hasher, password).await?;
        let credential = Credential::new(username.to_string(), password_hash);

        self.credential_repository
            .create_if_absent(&credential)
            .await?;

        debug!("credential created");
        Ok(())
    }
}
