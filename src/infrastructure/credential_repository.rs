use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr,
    sea_query::Expr,
};

use crate::domain::{
    error::RepositoryError,
    models::credential::{Credential, HashedPassword},
    repositories::credential_repository::CredentialRepository,
};
use crate::infrastructure::entity::credentials;

#[derive(Clone)]
pub struct SqlCredentialRepository {
    db: DatabaseConnection,
}

impl SqlCredentialRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Credential>, RepositoryError> {
        let model = credentials::Entity::find()
            .filter(credentials::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|model| {
            Credential::reconstruct(
                model.username,
                HashedPassword::new(model.password_hash),
                model.created_at,
                model.updated_at,
            )
        }))
    }
}

#[async_trait]
impl CredentialRepository for SqlCredentialRepository {
    async fn create_if_absent(&self, credential: &Credential) -> Result<(), RepositoryError> {
        let model = credentials::ActiveModel {
            username: Set(credential.username().to_string()),
            password_hash: Set(credential.password_hash().as_str().to_string()),
            created_at: Set(credential.created_at()),
            updated_at: Set(credential.updated_at()),
            ..Default::default()
        };

        // uniqueness is enforced by the UNIQUE index on username
        match credentials::Entity::insert(model).exec(&self.db).await {
            Ok(_) => Ok(()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(RepositoryError::AlreadyExists),
                _ => Err(RepositoryError::DatabaseError(e.to_string())),
            },
        }
    }

    async fn replace_if_exists(
        &self,
        username: &str,
        password_hash: &HashedPassword,
        updated_at: i64,
    ) -> Result<(), RepositoryError> {
        let result = credentials::Entity::update_many()
            .col_expr(
                credentials::Column::PasswordHash,
                Expr::value(password_hash.as_str()),
            )
            .col_expr(credentials::Column::UpdatedAt, Expr::value(updated_at))
            .filter(credentials::Column::Username.eq(username))
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        match result.rows_affected {
            0 => Err(RepositoryError::NotFound),
            1 => Ok(()),
            n => Err(RepositoryError::DatabaseError(format!(
                "expected one updated row, got {n}"
            ))),
        }
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.db
            .ping()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::connect_in_memory;

    fn credential(username: &str, hash: &str) -> Credential {
        Credential::new(username.to_string(), HashedPassword::new(hash.to_string()))
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let repo = SqlCredentialRepository::new(connect_in_memory().await);

        repo.create_if_absent(&credential("user@example.com", "hash-1"))
            .await
            .unwrap();

        let stored = repo
            .find_by_username("user@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.password_hash().as_str(), "hash-1");
        assert!(stored.updated_at().is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_negative() {
        let repo = SqlCredentialRepository::new(connect_in_memory().await);

        repo.create_if_absent(&credential("user@example.com", "hash-1"))
            .await
            .unwrap();
        let result = repo
            .create_if_absent(&credential("user@example.com", "hash-2"))
            .await;
        assert!(matches!(result, Err(RepositoryError::AlreadyExists)));

        // the first record survives untouched
        let stored = repo
            .find_by_username("user@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.password_hash().as_str(), "hash-1");
    }

    #[tokio::test]
    async fn test_username_is_case_sensitive() {
        let repo = SqlCredentialRepository::new(connect_in_memory().await);

        repo.create_if_absent(&credential("user@example.com", "hash-1"))
            .await
            .unwrap();
        repo.create_if_absent(&credential("User@example.com", "hash-2"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_replace_existing() {
        let repo = SqlCredentialRepository::new(connect_in_memory().await);

        repo.create_if_absent(&credential("user@example.com", "hash-1"))
            .await
            .unwrap();
        repo.replace_if_exists(
            "user@example.com",
            &HashedPassword::new("hash-2".to_string()),
            1_700_000_000,
        )
        .await
        .unwrap();

        let stored = repo
            .find_by_username("user@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.password_hash().as_str(), "hash-2");
        assert_eq!(stored.updated_at(), Some(1_700_000_000));
    }

    #[tokio::test]
    async fn test_replace_missing_does_not_create() {
        let repo = SqlCredentialRepository::new(connect_in_memory().await);

        let result = repo
            .replace_if_exists(
                "ghost@example.com",
                &HashedPassword::new("hash".to_string()),
                1_700_000_000,
            )
            .await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
        assert!(
            repo.find_by_username("ghost@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_ping() {
        let repo = SqlCredentialRepository::new(connect_in_memory().await);
        assert!(repo.ping().await.is_ok());
    }
}
