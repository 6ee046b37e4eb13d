//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arcade_core::entities::Profile;
use arcade_core::error::DomainError;
use arcade_core::traits::{ProfileRepository, RepoResult};
use arcade_core::Snowflake;

use crate::models::ProfileModel;

use super::error::{map_db_error, map_unique_violation};

const PROFILE_COLUMNS: &str = "id, handle, display_name, email, avatar_url, banner_url, bio, \
                               is_creator, is_admin, created_at, updated_at";

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_handle(&self, handle: &str) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE handle = $1"
        ))
        .bind(handle)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM profiles WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn handle_exists(&self, handle: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM profiles WHERE handle = $1)",
        )
        .bind(handle)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, profile: &Profile, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles
                (id, handle, display_name, email, password_hash, avatar_url, banner_url,
                 bio, is_creator, is_admin, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(profile.id.into_inner())
        .bind(&profile.handle)
        .bind(&profile.display_name)
        .bind(&profile.email)
        .bind(password_hash)
        .bind(&profile.avatar_url)
        .bind(&profile.banner_url)
        .bind(&profile.bio)
        .bind(profile.is_creator)
        .bind(profile.is_admin)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::HandleAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, profile: &Profile) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE profiles
            SET display_name = $2, avatar_url = $3, banner_url = $4, bio = $5,
                is_creator = $6, is_admin = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(profile.id.into_inner())
        .bind(&profile.display_name)
        .bind(&profile.avatar_url)
        .bind(&profile.banner_url)
        .bind(&profile.bio)
        .bind(profile.is_creator)
        .bind(profile.is_admin)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        let hash = sqlx::query_scalar::<_, String>(
            "SELECT password_hash FROM profiles WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(hash)
    }

    #[instrument(skip(self))]
    async fn list_creators(&self, limit: i64) -> RepoResult<Vec<Profile>> {
        let results = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE is_creator ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit.clamp(1, 100))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Profile::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgProfileRepository>();
    }
}
