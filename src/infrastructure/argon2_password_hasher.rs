use argon2::{
    Algorithm, Argon2, Params, PasswordHash as Argon2Hash, Version,
    password_hash::{PasswordHasher as Argon2Hasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::domain::{
    error::DomainError, models::credential::HashedPassword,
    services::password_service::PasswordHasher,
};

/// Memory cost in KiB
pub const MEMORY_COST: u32 = 64 * 1024;
/// Number of passes
pub const TIME_COST: u32 = 3;
pub const PARALLELISM: u32 = 1;

/// Argon2id hasher with a fixed work factor.
///
/// Stored forms are PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$digest`),
/// so verification reads the parameters back from the record itself.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new() -> Result<Self, DomainError> {
        let params = Params::new(MEMORY_COST, TIME_COST, PARALLELISM, None)
            .map_err(|e| DomainError::Hashing(e.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
        if plain_password.is_empty() {
            return Err(DomainError::EmptyInput);
        }

        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(plain_password.as_bytes(), &salt)
            .map_err(|e| DomainError::Hashing(e.to_string()))?
            .to_string();

        Ok(HashedPassword::new(hash))
    }

    fn verify(&self, hashed_password: &HashedPassword, plain_password: &str) -> bool {
        let Ok(parsed_hash) = Argon2Hash::new(hashed_password.as_str()) else {
            return false;
        };

        self.argon2()
            .verify_password(plain_password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}
