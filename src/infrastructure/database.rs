use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use crate::infrastructure::entity::credentials;

/// Store connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Open the connection pool.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(&config.url);
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .max_lifetime(Duration::from_secs(5 * 60))
        .idle_timeout(Duration::from_secs(2 * 60))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    db.ping().await?;

    tracing::info!(pool = config.max_connections, "database connected");
    Ok(db)
}

/// Create the credentials table if it does not exist yet.
pub async fn bootstrap(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(credentials::Entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;

    tracing::debug!("credentials table ready");
    Ok(())
}

#[cfg(test)]
pub(crate) async fn connect_in_memory() -> DatabaseConnection {
    // a single connection keeps every query on the same in-memory database
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let db = connect(&config).await.unwrap();
    bootstrap(&db).await.unwrap();
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let db = connect_in_memory().await;
        bootstrap(&db).await.unwrap();
        bootstrap(&db).await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_connection_fails_ping() {
        let db = connect_in_memory().await;
        let probe = db.clone();
        db.close().await.unwrap();
        assert!(probe.ping().await.is_err());
    }
}
