pub mod credential_policy;
pub mod password_service;
