pub mod credential_handler;
pub mod health_handler;
