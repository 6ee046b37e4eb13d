//! PostgreSQL implementation of CollectionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arcade_core::entities::{Collection, CollectionEntry};
use arcade_core::error::DomainError;
use arcade_core::traits::{CollectionRepository, RepoResult};
use arcade_core::Snowflake;

use crate::models::{CollectionEntryModel, CollectionModel, CollectionWithCountModel};

use super::error::{map_db_error, map_unique_violation};

const COLLECTION_COLUMNS: &str =
    "id, owner_id, title, slug, description, cover_url, is_public, created_at, updated_at";

/// PostgreSQL implementation of CollectionRepository
#[derive(Clone)]
pub struct PgCollectionRepository {
    pool: PgPool,
}

impl PgCollectionRepository {
    /// Create a new PgCollectionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionRepository for PgCollectionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Collection>> {
        let result = sqlx::query_as::<_, CollectionModel>(&format!(
            "SELECT {COLLECTION_COLUMNS} FROM collections WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Collection::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Collection>> {
        let result = sqlx::query_as::<_, CollectionModel>(&format!(
            "SELECT {COLLECTION_COLUMNS} FROM collections WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Collection::from))
    }

    #[instrument(skip(self))]
    async fn list_public(&self, limit: i64) -> RepoResult<Vec<(Collection, i64)>> {
        let results = sqlx::query_as::<_, CollectionWithCountModel>(
            r#"
            SELECT c.id, c.owner_id, c.title, c.slug, c.description, c.cover_url,
                   c.is_public, c.created_at, c.updated_at,
                   COUNT(cg.game_id) AS game_count
            FROM collections c
            LEFT JOIN collection_games cg ON cg.collection_id = c.id
            WHERE c.is_public
            GROUP BY c.id
            ORDER BY c.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit.clamp(1, 100))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|row| (Collection::from(row.collection), row.game_count))
            .collect())
    }

    #[instrument(skip(self))]
    async fn list_by_owner(&self, owner_id: Snowflake) -> RepoResult<Vec<Collection>> {
        let results = sqlx::query_as::<_, CollectionModel>(&format!(
            "SELECT {COLLECTION_COLUMNS} FROM collections WHERE owner_id = $1 ORDER BY created_at DESC"
        ))
        .bind(owner_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Collection::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, collection: &Collection) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO collections
                (id, owner_id, title, slug, description, cover_url, is_public,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(collection.id.into_inner())
        .bind(collection.owner_id.into_inner())
        .bind(&collection.title)
        .bind(&collection.slug)
        .bind(&collection.description)
        .bind(&collection.cover_url)
        .bind(collection.is_public)
        .bind(collection.created_at)
        .bind(collection.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::SlugAlreadyExists(collection.slug.clone()))
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, collection: &Collection) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE collections
            SET title = $2, description = $3, cover_url = $4, is_public = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(collection.id.into_inner())
        .bind(&collection.title)
        .bind(&collection.description)
        .bind(&collection.cover_url)
        .bind(collection.is_public)
        .bind(collection.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query("DELETE FROM collections WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_entry(&self, entry: &CollectionEntry) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO collection_games (collection_id, game_id, position, added_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (collection_id, game_id) DO NOTHING
            "#,
        )
        .bind(entry.collection_id.into_inner())
        .bind(entry.game_id.into_inner())
        .bind(entry.position)
        .bind(entry.added_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_entry(&self, collection_id: Snowflake, game_id: Snowflake) -> RepoResult<()> {
        sqlx::query("DELETE FROM collection_games WHERE collection_id = $1 AND game_id = $2")
            .bind(collection_id.into_inner())
            .bind(game_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_entries(&self, collection_id: Snowflake) -> RepoResult<Vec<CollectionEntry>> {
        let results = sqlx::query_as::<_, CollectionEntryModel>(
            r#"
            SELECT collection_id, game_id, position, added_at
            FROM collection_games
            WHERE collection_id = $1
            ORDER BY position, added_at
            "#,
        )
        .bind(collection_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CollectionEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCollectionRepository>();
    }
}
