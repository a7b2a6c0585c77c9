use crate::domain::{error::DomainError, models::credential::HashedPassword};

/// Service for hashing and verifying passwords
pub trait PasswordHasher: Clone {
    /// Hash a plain text password into a self-describing stored form
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError>;

    /// Verify a plain text password against a stored form.
    /// Malformed stored forms verify as `false`.
    fn verify(&self, hashed_password: &HashedPassword, plain_password: &str) -> bool;
}
