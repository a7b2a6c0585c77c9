//! Credential management service: signup and password reset over HTTP,
//! with argon2id-hashed credentials stored through sea-orm.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod telemetry;
pub mod usecase;

#[cfg(test)]
mod test_support;
