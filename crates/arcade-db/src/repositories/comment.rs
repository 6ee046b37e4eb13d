//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arcade_core::entities::Comment;
use arcade_core::traits::{CommentRepository, RepoResult};
use arcade_core::Snowflake;

use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, game_id, author_id, body, parent_id, created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn list_by_game(&self, game_id: Snowflake) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, game_id, author_id, body, parent_id, created_at, updated_at
            FROM comments
            WHERE game_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(game_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, game_id, author_id, body, parent_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(comment.id.into_inner())
        .bind(comment.game_id.into_inner())
        .bind(comment.author_id.into_inner())
        .bind(&comment.body)
        .bind(comment.parent_id.map(Snowflake::into_inner))
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
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
        assert_send_sync::<PgCommentRepository>();
    }
}
