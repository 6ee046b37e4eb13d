//! PostgreSQL implementation of ReportRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use arcade_core::entities::{Report, ReportStatus, ReportTarget};
use arcade_core::traits::{RepoResult, ReportRepository};
use arcade_core::Snowflake;

use crate::models::ReportModel;

use super::error::map_db_error;

const REPORT_COLUMNS: &str = "id, reporter_id, target_type, target_id, reason, details, status, \
                              resolved_by, resolved_at, created_at";

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Report>> {
        let result = sqlx::query_as::<_, ReportModel>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Report::from))
    }

    #[instrument(skip(self))]
    async fn find_pending(
        &self,
        reporter_id: Snowflake,
        target: ReportTarget,
        target_id: Snowflake,
    ) -> RepoResult<Option<Report>> {
        let result = sqlx::query_as::<_, ReportModel>(&format!(
            r#"
            SELECT {REPORT_COLUMNS}
            FROM reports
            WHERE reporter_id = $1 AND target_type = $2 AND target_id = $3 AND status = 'pending'
            "#
        ))
        .bind(reporter_id.into_inner())
        .bind(target.as_str())
        .bind(target_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Report::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, report: &Report) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reports
                (id, reporter_id, target_type, target_id, reason, details, status,
                 resolved_by, resolved_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(report.id.into_inner())
        .bind(report.reporter_id.into_inner())
        .bind(report.target.as_str())
        .bind(report.target_id.into_inner())
        .bind(&report.reason)
        .bind(&report.details)
        .bind(report.status.as_str())
        .bind(report.resolved_by.map(Snowflake::into_inner))
        .bind(report.resolved_at)
        .bind(report.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, report: &Report) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE reports
            SET status = $2, resolved_by = $3, resolved_at = $4
            WHERE id = $1
            "#,
        )
        .bind(report.id.into_inner())
        .bind(report.status.as_str())
        .bind(report.resolved_by.map(Snowflake::into_inner))
        .bind(report.resolved_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, status: Option<ReportStatus>, limit: i64) -> RepoResult<Vec<Report>> {
        let results = sqlx::query_as::<_, ReportModel>(&format!(
            r#"
            SELECT {REPORT_COLUMNS}
            FROM reports
            WHERE ($1::TEXT IS NULL OR status = $1)
            ORDER BY created_at DESC
            LIMIT $2
            "#
        ))
        .bind(status.map(|s| s.as_str()))
        .bind(limit.clamp(1, 200))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Report::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReportRepository>();
    }
}
