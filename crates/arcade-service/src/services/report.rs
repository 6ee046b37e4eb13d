//! Report service - filing and moderating abuse reports

use arcade_core::entities::{Report, ReportStatus, ReportTarget};
use arcade_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{CreateReportRequest, ReportResponse, ResolveReportRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// File a report against a game, comment, or profile
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        reporter_id: Snowflake,
        request: CreateReportRequest,
    ) -> ServiceResult<ReportResponse> {
        let target = ReportTarget::parse(&request.target_type)
            .ok_or_else(|| ServiceError::validation("Invalid target type"))?;

        let target_id: Snowflake = request
            .target_id
            .parse()
            .map_err(|_| ServiceError::validation("Invalid target_id"))?;

        // One open report per reporter/target
        if self
            .ctx
            .report_repo()
            .find_pending(reporter_id, target, target_id)
            .await?
            .is_some()
        {
            return Err(ServiceError::Domain(DomainError::AlreadyReported));
        }

        let report_id = self.ctx.generate_id();
        let report = Report::new(
            report_id,
            reporter_id,
            target,
            target_id,
            request.reason,
            request.details,
        );

        self.ctx.report_repo().create(&report).await?;

        info!(report_id = %report_id, target = %target, target_id = %target_id, "report filed");

        Ok(ReportResponse::from(&report))
    }

    /// List reports for the moderation queue (admin)
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        caller_id: Snowflake,
        status: Option<ReportStatus>,
        limit: i64,
    ) -> ServiceResult<Vec<ReportResponse>> {
        self.require_admin(caller_id).await?;

        let reports = self.ctx.report_repo().list(status, limit).await?;
        Ok(reports.iter().map(ReportResponse::from).collect())
    }

    /// Resolve a report (admin): `remove` deletes the content, `dismiss` keeps it
    #[instrument(skip(self, request))]
    pub async fn resolve(
        &self,
        report_id: Snowflake,
        caller_id: Snowflake,
        request: ResolveReportRequest,
    ) -> ServiceResult<ReportResponse> {
        self.require_admin(caller_id).await?;

        let mut report = self
            .ctx
            .report_repo()
            .find_by_id(report_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Report", report_id.to_string()))?;

        let status = match request.action.as_str() {
            "remove" => ReportStatus::Removed,
            "dismiss" => ReportStatus::Dismissed,
            other => {
                return Err(ServiceError::validation(format!("Unknown action: {other}")));
            }
        };

        if status == ReportStatus::Removed {
            // Take the offending content down; profile reports are resolved
            // without deleting the account
            match report.target {
                ReportTarget::Game => {
                    self.ctx.game_repo().delete(report.target_id).await?;
                }
                ReportTarget::Comment => {
                    self.ctx.comment_repo().delete(report.target_id).await?;
                }
                ReportTarget::Profile => {
                    warn!(target_id = %report.target_id, "profile report resolved without removal");
                }
            }
        }

        report.resolve(status, caller_id);
        self.ctx.report_repo().update(&report).await?;

        info!(report_id = %report_id, status = %status, "report resolved");

        Ok(ReportResponse::from(&report))
    }

    async fn require_admin(&self, caller_id: Snowflake) -> ServiceResult<()> {
        let caller = self
            .ctx
            .profile_repo()
            .find_by_id(caller_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", caller_id.to_string()))?;

        if !caller.is_admin {
            return Err(ServiceError::Domain(DomainError::AdminRequired));
        }
        Ok(())
    }
}
