//! PostgreSQL implementation of ScoreRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arcade_core::entities::GameScore;
use arcade_core::traits::{RepoResult, ScoreRepository};
use arcade_core::Snowflake;

use crate::models::GameScoreModel;

use super::error::map_db_error;

const SCORE_COLUMNS: &str = "game_id, like_count, love_count, favorite_count, total_reactions, \
                             weighted_score, tier, play_count, updated_at";

/// PostgreSQL implementation of ScoreRepository
#[derive(Clone)]
pub struct PgScoreRepository {
    pool: PgPool,
}

impl PgScoreRepository {
    /// Create a new PgScoreRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreRepository for PgScoreRepository {
    #[instrument(skip(self))]
    async fn find_by_game(&self, game_id: Snowflake) -> RepoResult<Option<GameScore>> {
        let result = sqlx::query_as::<_, GameScoreModel>(&format!(
            "SELECT {SCORE_COLUMNS} FROM game_scores WHERE game_id = $1"
        ))
        .bind(game_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GameScore::from))
    }

    #[instrument(skip(self, game_ids))]
    async fn find_many(&self, game_ids: &[Snowflake]) -> RepoResult<Vec<GameScore>> {
        if game_ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw_ids: Vec<i64> = game_ids.iter().map(|id| id.into_inner()).collect();
        let results = sqlx::query_as::<_, GameScoreModel>(&format!(
            "SELECT {SCORE_COLUMNS} FROM game_scores WHERE game_id = ANY($1)"
        ))
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GameScore::from).collect())
    }

    #[instrument(skip(self))]
    async fn upsert(&self, score: &GameScore) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO game_scores
                (game_id, like_count, love_count, favorite_count, total_reactions,
                 weighted_score, tier, play_count, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (game_id)
            DO UPDATE SET
                like_count = EXCLUDED.like_count,
                love_count = EXCLUDED.love_count,
                favorite_count = EXCLUDED.favorite_count,
                total_reactions = EXCLUDED.total_reactions,
                weighted_score = EXCLUDED.weighted_score,
                tier = EXCLUDED.tier,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(score.game_id.into_inner())
        .bind(score.counts.like as i32)
        .bind(score.counts.love as i32)
        .bind(score.counts.favorite as i32)
        .bind(score.total_reactions as i32)
        .bind(score.weighted_score as i32)
        .bind(score.tier.as_str())
        .bind(score.play_count)
        .bind(score.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn record_play(&self, game_id: Snowflake) -> RepoResult<()> {
        // Single statement keeps the increment atomic under concurrent plays
        sqlx::query(
            r#"
            INSERT INTO game_scores (game_id, play_count, updated_at)
            VALUES ($1, 1, now())
            ON CONFLICT (game_id)
            DO UPDATE SET play_count = game_scores.play_count + 1, updated_at = now()
            "#,
        )
        .bind(game_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn top_by_plays(&self, limit: i64) -> RepoResult<Vec<GameScore>> {
        let results = sqlx::query_as::<_, GameScoreModel>(&format!(
            "SELECT {SCORE_COLUMNS} FROM game_scores ORDER BY play_count DESC LIMIT $1"
        ))
        .bind(limit.clamp(1, 100))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GameScore::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgScoreRepository>();
    }
}
