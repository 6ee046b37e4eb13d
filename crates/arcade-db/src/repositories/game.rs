//! PostgreSQL implementation of GameRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arcade_core::entities::Game;
use arcade_core::error::DomainError;
use arcade_core::traits::{GameQuery, GameRepository, RepoResult};
use arcade_core::Snowflake;

use crate::models::GameModel;

use super::error::{map_db_error, map_unique_violation};

const GAME_COLUMNS: &str = "id, creator_id, title, slug, short_description, long_description, \
                            thumbnail_url, embed_url, status, genres, tags, published_at, \
                            created_at, updated_at";

/// PostgreSQL implementation of GameRepository
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    /// Create a new PgGameRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Game>> {
        let result = sqlx::query_as::<_, GameModel>(&format!(
            "SELECT {GAME_COLUMNS} FROM games WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Game::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Game>> {
        let result = sqlx::query_as::<_, GameModel>(&format!(
            "SELECT {GAME_COLUMNS} FROM games WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Game::from))
    }

    #[instrument(skip(self))]
    async fn slug_exists(&self, slug: &str) -> RepoResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM games WHERE slug = $1)")
                .bind(slug)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: GameQuery) -> RepoResult<Vec<Game>> {
        // Optional filters collapse to always-true clauses when unset
        let results = sqlx::query_as::<_, GameModel>(&format!(
            r#"
            SELECT {GAME_COLUMNS}
            FROM games
            WHERE ($1 OR status = 'published')
              AND ($2::TEXT IS NULL OR $2 = ANY(genres))
              AND ($3::BIGINT IS NULL OR creator_id = $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#
        ))
        .bind(query.include_unpublished)
        .bind(query.genre)
        .bind(query.creator_id.map(Snowflake::into_inner))
        .bind(query.limit.clamp(1, 100))
        .bind(query.offset.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Game::from).collect())
    }

    #[instrument(skip(self, ids))]
    async fn find_many(&self, ids: &[Snowflake]) -> RepoResult<Vec<Game>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw_ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();
        let results = sqlx::query_as::<_, GameModel>(&format!(
            "SELECT {GAME_COLUMNS} FROM games WHERE id = ANY($1)"
        ))
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Game::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, game: &Game) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO games
                (id, creator_id, title, slug, short_description, long_description,
                 thumbnail_url, embed_url, status, genres, tags, published_at,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(game.id.into_inner())
        .bind(game.creator_id.into_inner())
        .bind(&game.title)
        .bind(&game.slug)
        .bind(&game.short_description)
        .bind(&game.long_description)
        .bind(&game.thumbnail_url)
        .bind(&game.embed_url)
        .bind(game.status.as_str())
        .bind(&game.genres)
        .bind(&game.tags)
        .bind(game.published_at)
        .bind(game.created_at)
        .bind(game.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugAlreadyExists(game.slug.clone())))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, game: &Game) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE games
            SET title = $2, slug = $3, short_description = $4, long_description = $5,
                thumbnail_url = $6, embed_url = $7, status = $8, genres = $9, tags = $10,
                published_at = $11, updated_at = $12
            WHERE id = $1
            "#,
        )
        .bind(game.id.into_inner())
        .bind(&game.title)
        .bind(&game.slug)
        .bind(&game.short_description)
        .bind(&game.long_description)
        .bind(&game.thumbnail_url)
        .bind(&game.embed_url)
        .bind(game.status.as_str())
        .bind(&game.genres)
        .bind(&game.tags)
        .bind(game.published_at)
        .bind(game.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugAlreadyExists(game.slug.clone())))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Comments, reactions, bookmarks, and the score row go with it (FK cascade)
        sqlx::query("DELETE FROM games WHERE id = $1")
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
        assert_send_sync::<PgGameRepository>();
    }
}
