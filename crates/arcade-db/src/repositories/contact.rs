//! PostgreSQL implementation of ContactRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arcade_core::entities::ContactMessage;
use arcade_core::traits::{ContactRepository, RepoResult};

use super::error::map_db_error;

/// PostgreSQL implementation of ContactRepository
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    /// Create a new PgContactRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    #[instrument(skip(self, message))]
    async fn create(&self, message: &ContactMessage) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO contact_messages (id, name, email, subject, message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(message.id.into_inner())
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.message)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgContactRepository>();
    }
}
