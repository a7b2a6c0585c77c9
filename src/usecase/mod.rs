pub mod reset_password_usecase;
pub mod signup_usecase;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::{
    error::DomainError, models::credential::HashedPassword,
    services::password_service::PasswordHasher,
};

/// Run the deliberately slow hash on the blocking pool so it does not stall
/// the async workers. The work completes even if the request is dropped.
async fn hash_password<P>(hasher: &P, password: SecretString) -> Result<HashedPassword, DomainError>
where
    P: PasswordHasher + Send + 'static,
{
    let hasher = hasher.clone();
    tokio::task::spawn_blocking(move || hasher.hash(password.expose_secret()))
        .await
        .map_err(|e| DomainError::Hashing(e.to_string()))?
}
