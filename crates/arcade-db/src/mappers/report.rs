//! Report entity <-> model mapper

use arcade_core::entities::{Report, ReportStatus, ReportTarget};
use arcade_core::Snowflake;

use crate::models::ReportModel;

impl From<ReportModel> for Report {
    fn from(model: ReportModel) -> Self {
        Report {
            id: Snowflake::new(model.id),
            reporter_id: Snowflake::new(model.reporter_id),
            // Unknown strings fall back to the broadest target and pending status
            target: ReportTarget::parse(&model.target_type).unwrap_or(ReportTarget::Game),
            target_id: Snowflake::new(model.target_id),
            reason: model.reason,
            details: model.details,
            status: ReportStatus::parse(&model.status).unwrap_or_default(),
            resolved_by: model.resolved_by.map(Snowflake::new),
            resolved_at: model.resolved_at,
            created_at: model.created_at,
        }
    }
}
