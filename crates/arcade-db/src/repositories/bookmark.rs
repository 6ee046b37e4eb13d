//! PostgreSQL implementation of BookmarkRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arcade_core::entities::Bookmark;
use arcade_core::traits::{BookmarkRepository, RepoResult};
use arcade_core::Snowflake;

use crate::models::BookmarkModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BookmarkRepository
#[derive(Clone)]
pub struct PgBookmarkRepository {
    pool: PgPool,
}

impl PgBookmarkRepository {
    /// Create a new PgBookmarkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkRepository for PgBookmarkRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: Snowflake, game_id: Snowflake) -> RepoResult<Option<Bookmark>> {
        let result = sqlx::query_as::<_, BookmarkModel>(
            r#"
            SELECT user_id, game_id, created_at
            FROM bookmarks
            WHERE user_id = $1 AND game_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(game_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Bookmark::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, bookmark: &Bookmark) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO bookmarks (user_id, game_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, game_id) DO NOTHING
            "#,
        )
        .bind(bookmark.user_id.into_inner())
        .bind(bookmark.game_id.into_inner())
        .bind(bookmark.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: Snowflake, game_id: Snowflake) -> RepoResult<()> {
        sqlx::query("DELETE FROM bookmarks WHERE user_id = $1 AND game_id = $2")
            .bind(user_id.into_inner())
            .bind(game_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_game_ids(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        let results = sqlx::query_scalar::<_, i64>(
            "SELECT game_id FROM bookmarks WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id.into_inner())
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
        assert_send_sync::<PgBookmarkRepository>();
    }
}
