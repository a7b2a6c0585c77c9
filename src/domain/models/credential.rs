use std::fmt;

use chrono::Utc;

/// Value object representing a hashed password
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Create a new HashedPassword from an already hashed string
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// Get the hash as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// the encoded hash stays out of logs
impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword([REDACTED])")
    }
}

/// Stored credential record, keyed uniquely by username
#[derive(Debug, Clone)]
pub struct Credential {
    username: String,
    password_hash: HashedPassword,
    created_at: i64,
    updated_at: Option<i64>,
}

impl Credential {
    pub fn new(username: String, password_hash: HashedPassword) -> Self {
        Self {
            username,
            password_hash,
            created_at: Utc::now().timestamp(),
            updated_at: None,
        }
    }

    pub fn reconstruct(
        username: String,
        password_hash: HashedPassword,
        created_at: i64,
        updated_at: Option<i64>,
    ) -> Self {
        Self {
            username,
            password_hash,
            created_at,
            updated_at,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<i64> {
        self.updated_at
    }
}
