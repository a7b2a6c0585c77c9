use std::fmt;

use thiserror::Error;

/// Input field a policy violation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Username => f.write_str("username"),
            Field::Password => f.write_str("password"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    Empty(Field),

    #[error("{0} exceeds maximum length")]
    TooLong(Field),

    #[error("password must be at least 8 characters")]
    TooShort,

    #[error("password must contain at least one letter and one number")]
    TooWeak,

    #[error("invalid email format")]
    MalformedAddress,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("password cannot be empty")]
    EmptyInput,

    #[error("failed to hash password: {0}")]
    Hashing(String),

    #[error("user already exists")]
    AlreadyExists,

    #[error("user not found")]
    NotFound,

    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists => DomainError::AlreadyExists,
            RepositoryError::NotFound => DomainError::NotFound,
            other => DomainError::Repository(other),
        }
    }
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Already exists")]
    AlreadyExists,

    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
