//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arcade_core::entities::Reaction;
use arcade_core::traits::{ReactionRepository, RepoResult};
use arcade_core::{ReactionKind, Snowflake};

use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: Snowflake, game_id: Snowflake) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT user_id, game_id, kind, created_at, updated_at
            FROM reactions
            WHERE user_id = $1 AND game_id = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(game_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reactions (user_id, game_id, kind, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, game_id)
            DO UPDATE SET kind = EXCLUDED.kind, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(reaction.user_id.into_inner())
        .bind(reaction.game_id.into_inner())
        .bind(reaction.kind.as_str())
        .bind(reaction.created_at)
        .bind(reaction.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: Snowflake, game_id: Snowflake) -> RepoResult<()> {
        sqlx::query("DELETE FROM reactions WHERE user_id = $1 AND game_id = $2")
            .bind(user_id.into_inner())
            .bind(game_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_kind(&self, game_id: Snowflake, kind: ReactionKind) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM reactions WHERE game_id = $1 AND kind = $2",
        )
        .bind(game_id.into_inner())
        .bind(kind.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReactionRepository>();
    }
}
