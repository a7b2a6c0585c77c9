//! In-memory doubles for the domain traits, shared by the test modules.

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::credential::{Credential, HashedPassword},
    repositories::credential_repository::CredentialRepository,
    services::password_service::PasswordHasher,
};

// mock hasher: cheap and deterministic, never equal to the plaintext
#[derive(Clone)]
pub struct MockPasswordHasher;

impl PasswordHasher for MockPasswordHasher {
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
        if plain_password.is_empty() {
            return Err(DomainError::EmptyInput);
        }
        let reversed: String = plain_password.chars().rev().collect();
        Ok(HashedPassword::new(format!("$mock${reversed}")))
    }

    fn verify(&self, hashed_password: &HashedPassword, plain_password: &str) -> bool {
        self.hash(plain_password)
            .map(|hash| &hash == hashed_password)
            .unwrap_or(false)
    }
}

// mock repository: a mutex-guarded map gives the same atomicity as the unique index
#[derive(Clone)]
pub struct InMemoryCredentialRepository {
    records: Arc<Mutex<HashMap<String, Credential>>>,
    connected: Arc<AtomicBool>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            connected: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn with_user(username: &str, password: &str) -> Self {
        let repo = Self::new();
        let hash = MockPasswordHasher.hash(password).unwrap();
        repo.records.lock().unwrap().insert(
            username.to_string(),
            Credential::reconstruct(username.to_string(), hash, 1_600_000_000, None),
        );
        repo
    }

    pub fn disconnected() -> Self {
        let repo = Self::new();
        repo.disconnect();
        repo
    }

    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    pub fn get(&self, username: &str) -> Option<Credential> {
        self.records.lock().unwrap().get(username).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn check_connected(&self) -> Result<(), RepositoryError> {
        if self.connected.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RepositoryError::DatabaseError(
                "connection refused: sqlite://data.db".to_string(),
            ))
        }
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn create_if_absent(&self, credential: &Credential) -> Result<(), RepositoryError> {
        self.check_connected()?;
        let mut records = self.records.lock().unwrap();
        if records.contains_key(credential.username()) {
            return Err(RepositoryError::AlreadyExists);
        }
        records.insert(credential.username().to_string(), credential.clone());
        Ok(())
    }

    async fn replace_if_exists(
        &self,
        username: &str,
        password_hash: &HashedPassword,
        updated_at: i64,
    ) -> Result<(), RepositoryError> {
        self.check_connected()?;
        let mut records = self.records.lock().unwrap();
        let existing = records.get(username).ok_or(RepositoryError::NotFound)?;
        let replaced = Credential::reconstruct(
            existing.username().to_string(),
            password_hash.clone(),
            existing.created_at(),
            Some(updated_at),
        );
        records.insert(username.to_string(), replaced);
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.check_connected()
    }
}
