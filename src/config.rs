//! Application configuration loaded from environment variables.

use thiserror::Error;

use crate::infrastructure::database::DatabaseConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be between 1 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("LOG_FORMAT must be \"text\" or \"json\", got {0:?}")]
    InvalidLogFormat(String),

    #[error("{0} environment variable is required in production")]
    MissingInProduction(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_format: LogFormat,
    /// Requests per minute. Parsed and reported, not enforced.
    pub rate_limit: u32,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .ok()
                .filter(|port| *port != 0)
                .ok_or(ConfigError::InvalidPort(value))?,
            None => 3000,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        };

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        // the DSN may carry credentials, so it is never logged
        let url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None if environment == "production" => {
                return Err(ConfigError::MissingInProduction("DATABASE_URL"));
            }
            None => {
                let path = lookup("DATABASE_PATH").unwrap_or_else(|| "data.db".to_string());
                format!("sqlite://{path}?mode=rwc")
            }
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            environment,
            log_format,
            rate_limit: number(&lookup, "RATE_LIMIT", 100)?,
            database: DatabaseConfig {
                url,
                max_connections: number(&lookup, "DATABASE_MAX_CONNECTIONS", 25)?,
                min_connections: number(&lookup, "DATABASE_MIN_CONNECTIONS", 1)?,
            },
        })
    }
}

fn number<F>(lookup: &F, key: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        None => Ok(default),
    }
}
