use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::credential::{Credential, HashedPassword},
};

/// Persistence contract for credential records.
///
/// Both writes must be atomic with respect to username uniqueness.
#[async_trait]
pub trait CredentialRepository {
    /// Insert the record unless one exists for the same username.
    /// Returns `RepositoryError::AlreadyExists` to the losing caller.
    async fn create_if_absent(&self, credential: &Credential) -> Result<(), RepositoryError>;

    /// Replace the stored hash of an existing record; never creates one.
    /// Returns `RepositoryError::NotFound` when no record matches.
    async fn replace_if_exists(
        &self,
        username: &str,
        password_hash: &HashedPassword,
        updated_at: i64,
    ) -> Result<(), RepositoryError>;

    /// Lightweight connectivity probe
    async fn ping(&self) -> Result<(), RepositoryError>;
}
