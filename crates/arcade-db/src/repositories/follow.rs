//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arcade_core::entities::Follow;
use arcade_core::traits::{FollowRepository, RepoResult};
use arcade_core::Snowflake;

use crate::models::FollowModel;

use super::error::map_db_error;

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        follower_id: Snowflake,
        followed_id: Snowflake,
    ) -> RepoResult<Option<Follow>> {
        let result = sqlx::query_as::<_, FollowModel>(
            r#"
            SELECT follower_id, followed_id, created_at
            FROM follows
            WHERE follower_id = $1 AND followed_id = $2
            "#,
        )
        .bind(follower_id.into_inner())
        .bind(followed_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Follow::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, follow: &Follow) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO follows (follower_id, followed_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (follower_id, followed_id) DO NOTHING
            "#,
        )
        .bind(follow.follower_id.into_inner())
        .bind(follow.followed_id.into_inner())
        .bind(follow.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, follower_id: Snowflake, followed_id: Snowflake) -> RepoResult<()> {
        sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followed_id = $2")
            .bind(follower_id.into_inner())
            .bind(followed_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_followers(&self, profile_id: Snowflake) -> RepoResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follows WHERE followed_id = $1")
                .bind(profile_id.into_inner())
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn list_followed_ids(&self, follower_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        let results = sqlx::query_scalar::<_, i64>(
            "SELECT followed_id FROM follows WHERE follower_id = $1 ORDER BY created_at DESC",
        )
        .bind(follower_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Snowflake::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgFollowRepository>();
    }
}
